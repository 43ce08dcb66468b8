pub mod loaders;
pub mod stores;

pub use loaders::stopwords::load_stopwords;
pub use loaders::wordlist::{LoadReport, load_dictionary, parse_line};
pub use stores::durable::DurableLexicon;
