pub mod stopwords;
pub mod wordlist;
