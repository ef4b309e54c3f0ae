//! Structured output example with a response schema

use gemini_client::{GeminiClient, Schema};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GeminiClient::from_env()?;

    // Define a response schema for structured output
    let schema = Schema::object()
        .property("name", Schema::string().describe("The person's name"))
        .property("age", Schema::integer().describe("The person's age"))
        .property("occupation", Schema::string().describe("The person's job"))
        .required(["name", "age", "occupation"]);

    let prompt = "Extract person information: John Smith is a 35 year old software engineer.";

    let response = client
        .generate_structured("gemini-3-flash-preview", prompt, schema)
        .await?;

    println!("Structured output: {}", response);

    // Parse the JSON
    let parsed: serde_json::Value = serde_json::from_str(&response)?;
    println!("\nParsed:");
    println!("  Name: {}", parsed["name"]);
    println!("  Age: {}", parsed["age"]);
    println!("  Occupation: {}", parsed["occupation"]);

    Ok(())
}
