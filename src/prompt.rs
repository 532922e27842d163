//! The fixed instruction sent to every backend.

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates README.md files for codebases.";

const README_TEMPLATE: &str = r#"You are tasked with generating a README.md file for a given codebase. Make sure the content is placed between <readme> </readme> tags. Your goal is to create a detailed document that explains what the application does and provides instructions for users to run the application. Follow these steps to complete the task:

1. First, you will be provided with the codebase in the following format:

<codebase>
{codebase}
</codebase>

2. Analyze the codebase thoroughly. Pay attention to:
   - The main functionality of the application
   - Technologies and frameworks used
   - File structure
   - Dependencies
   - Configuration files
   - Entry points of the application

3. Structure your README.md file to include the following sections:
   - Project Title
   - Description
   - Features
   - Installation
   - Usage
   - Configuration (if applicable)
   - Dependencies

4. For each section, provide detailed and relevant information:
   - Project Title: Use the name of the main folder or the project name if evident from the codebase.
   - Description: Briefly explain what the application does and its main purpose.
   - Features: List the key functionalities of the application.
   - Installation: Provide step-by-step instructions for setting up the project locally.
   - Usage: Explain how to run the application and any important commands or scripts.
   - Configuration: If the app requires any configuration, explain how to set it up.
   - Dependencies: List all major dependencies and their versions.

5. Write in a clear, concise, and professional tone. Use markdown formatting to enhance readability:
   - Use headers (##, ###) for different sections
   - Use code blocks (```) for command-line instructions or code snippets
   - Use bullet points (-) for lists
   - Use bold (**) or italic (*) for emphasis where appropriate

6. Output your generated README.md file within <readme> tags. Ensure that the content is properly formatted in markdown.

Begin your analysis and README.md generation now. Remember to base all information strictly on the provided codebase."#;

const PLACEHOLDER: &str = "{codebase}";

/// Embeds `source` into the README template. Only the placeholder is
/// substituted, so braces or `{codebase}` inside the source stay as they are.
pub fn build_prompt(source: &str) -> String {
    match README_TEMPLATE.split_once(PLACEHOLDER) {
        Some((head, tail)) => {
            let mut prompt = String::with_capacity(README_TEMPLATE.len() + source.len());
            prompt.push_str(head);
            prompt.push_str(source);
            prompt.push_str(tail);
            prompt
        }
        None => README_TEMPLATE.to_string(),
    }
}
