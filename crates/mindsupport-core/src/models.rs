pub mod chat_history;
pub mod forum;
pub mod resource;
pub mod screening_record;
