pub mod azure_openai; // Azure OpenAI chat completions
pub mod completion;

pub use azure_openai::AzureOpenAIService;
pub use completion::CompletionService;
