//! Advice generation handlers.

mod generate_advice;

pub use generate_advice::{
    AdviceGeneratorConfig, GenerateAdviceCommand, GenerateAdviceHandler, GenerateAdviceResult,
};
