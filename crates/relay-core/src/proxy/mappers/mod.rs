// Protocol mappers
// Claude Messages (front) ↔ OpenAI ChatCompletions (back)

pub mod claude;
