mod suggest;
mod token;

pub use suggest::SuggestionClient;
pub use token::TokenCache;
