//! Request and response types for the HTTP API

pub mod request;
pub mod response;

pub use request::{
    GenerateFromNewsRequest, GenerateFromPaperRequest, GenerateQuizRequest, NewsQuery, PapersQuery,
};
pub use response::{
    ArticlesResponse, ContentQuizResponse, HealthResponse, NewsQuizResponse, PaperQuizResponse,
    PapersResponse, SubmitResponse,
};
