pub mod color;
pub mod composer;
pub mod enhancer;
pub mod felt_sense;
pub mod handlers;
pub mod naming;
pub mod nervous_system;
pub mod prompts;
pub mod sensory;
pub mod story;
pub mod tone;
pub mod voice;
