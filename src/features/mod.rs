pub mod completion;
pub mod personas;
pub mod responder;

pub use completion::{CompletionClient, ModelSettings, OpenAiCompletion};
pub use personas::{Persona, PersonaManager};
pub use responder::{Conversation, PersonaResponder};
