pub mod chat_response;
