pub mod ai_response;
