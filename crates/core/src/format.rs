use crate::types::{GeneratedScriptResult, NewScript};

/// Join each section's spoken audio in order, separated by a blank line.
/// This is the text a narrator would read straight through.
pub fn full_script_text(script: &NewScript) -> String {
    script
        .sections
        .iter()
        .map(|section| section.spoken_audio.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format a generation result as human-readable markdown
pub fn format_result_readable(result: &GeneratedScriptResult) -> String {
    let mut output = String::new();

    // Title and thumbnail
    output.push_str(&format!("# {}\n\n", result.new_script.title));
    output.push_str(&format!(
        "**Thumbnail idea:** {}\n\n",
        result.new_script.thumbnail_idea
    ));

    // Analysis of the reference
    output.push_str("## Why the reference worked\n\n");
    output.push_str(&format!(
        "**Hook strategy:** {}\n\n",
        result.analysis.hook_strategy
    ));
    output.push_str(&format!(
        "**Pacing & tone:** {}\n\n",
        result.analysis.pacing_and_tone
    ));

    output.push_str("### Retention tactics\n\n");
    for tactic in &result.analysis.retention_tactics {
        output.push_str(&format!("• {}\n", tactic));
    }
    output.push('\n');

    // Sections, in payload order
    output.push_str("## New script\n\n");
    for section in &result.new_script.sections {
        output.push_str(&format!("### {}\n\n", section.section_name));
        output.push_str(&format!("🎥 Visual: {}\n\n", section.visual_cue));
        output.push_str(&format!("{}\n\n", section.spoken_audio));
    }

    // Narration text without the editing scaffolding
    output.push_str("## Full script\n\n");
    output.push_str(&full_script_text(&result.new_script));
    output.push('\n');

    output
}
