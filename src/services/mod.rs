pub mod chatbot;
pub mod openai;
pub mod provider;
