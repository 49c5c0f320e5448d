use crate::types::GenerationRequest;

/// System instruction for the script consultant role. `lang` selects the
/// output language of both the analysis and the new script.
pub fn build_system_prompt(lang: &str) -> String {
    format!(
        r#"You are an expert YouTube Script Consultant and Copywriter.
Your task is to take a "Reference Script" (which is known to be successful/viral) and a "New Topic".

1. First, deep-analyze the Reference Script to understand WHY it worked. Look for:
   - The specific hook structure (how it grabs attention in 5 seconds).
   - The pacing and sentence length.
   - Where the open loops (curiosity gaps) are placed.
   - The tone (exciting, serious, funny, fast-paced).

2. Then, write a BRAND NEW script for the "New Topic" that strictly follows the structural and psychological blueprint of the Reference Script.

3. Write ALL output text (the analysis and the new script) in {lang} language.

IMPORTANT: The new script must not just copy the words, but copy the *soul* and *rhythm* of the reference.
Include visual cues for the editor."#,
        lang = lang
    )
}

/// User message carrying the two inputs in labeled blocks
pub fn build_user_prompt(request: &GenerationRequest) -> String {
    format!(
        "[Reference Script]:\n{}\n\n[New Topic]:\n{}",
        request.reference_script(),
        request.new_topic()
    )
}
