use iced::widget::{Column, button, column, scrollable, text, text_input};
use iced::{Element, Length, Task};
use tokio_util::sync::CancellationToken;

use viralscript_core::{
    GeneratedScriptResult, GenerationOptions, GenerationRequest, Phase, Provider, Session,
    full_script_text, generate_script,
};

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title("ViralScript")
        .run()
}

#[derive(Default)]
struct App {
    reference_script: String,
    new_topic: String,
    session: Session,
}

#[derive(Debug, Clone)]
enum Message {
    ReferenceChanged(String),
    TopicChanged(String),
    Generate,
    Generated(Result<GeneratedScriptResult, String>),
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ReferenceChanged(value) => self.reference_script = value,
            Message::TopicChanged(value) => self.new_topic = value,
            Message::Generate => {
                let request = match GenerationRequest::new(
                    self.reference_script.clone(),
                    self.new_topic.clone(),
                ) {
                    Ok(request) => request,
                    Err(_) => return Task::none(),
                };
                if self
                    .session
                    .begin("Analyzing script structure...")
                    .is_err()
                {
                    // A request is already in flight; the button being disabled
                    // makes this unreachable from the UI.
                    return Task::none();
                }

                let provider = Provider::default();
                let options = GenerationOptions::default();
                return Task::perform(
                    async move {
                        let cancel = CancellationToken::new();
                        generate_script(&request, &provider, &options, &cancel)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::Generated,
                );
            }
            Message::Generated(Ok(result)) => self.session.complete(result),
            Message::Generated(Err(reason)) => self.session.fail(reason),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let busy = self.session.is_busy();

        let mut reference_input = text_input(
            "Paste the script of a video that blew up...",
            &self.reference_script,
        );
        let mut topic_input = text_input(
            "E.g. why diets fail, how to hit 1M subscribers...",
            &self.new_topic,
        );
        if !busy {
            reference_input = reference_input.on_input(Message::ReferenceChanged);
            topic_input = topic_input.on_input(Message::TopicChanged);
        }

        let can_submit = !busy
            && !self.reference_script.trim().is_empty()
            && !self.new_topic.trim().is_empty();
        let submit = button(text(if busy {
            "Analyzing..."
        } else {
            "Analyze & Generate"
        }))
        .on_press_maybe(can_submit.then_some(Message::Generate));

        let mut page = column![
            text("ViralScript").size(24),
            text("Reference script (known success)"),
            reference_input,
            text("New topic"),
            topic_input,
            submit,
        ]
        .padding(20)
        .spacing(10);

        match self.session.phase() {
            Phase::Analyzing | Phase::Generating => {
                page = page.push(text(
                    self.session
                        .loading()
                        .message
                        .clone()
                        .unwrap_or_else(|| "Working...".to_string()),
                ));
            }
            Phase::Error => {
                page = page.push(text(format!(
                    "Error: {}",
                    self.session
                        .loading()
                        .message
                        .clone()
                        .unwrap_or_else(|| "generation failed".to_string())
                )));
            }
            Phase::Idle => {
                page = page.push(text("Paste a script and start the analysis."));
            }
            Phase::Complete => {}
        }

        if let Some(result) = self.session.result() {
            page = page.push(scrollable(result_panel(result)).height(Length::Fill));
        }

        page.into()
    }
}

fn result_panel(result: &GeneratedScriptResult) -> Column<'static, Message> {
    let mut panel = column![
        text(result.new_script.title.clone()).size(20),
        text(format!(
            "Thumbnail idea: {}",
            result.new_script.thumbnail_idea
        )),
        text(format!("Hook strategy: {}", result.analysis.hook_strategy)),
        text(format!("Pacing & tone: {}", result.analysis.pacing_and_tone)),
        text(format!(
            "Retention tactics: {}",
            result.analysis.retention_tactics.join(", ")
        )),
    ]
    .spacing(8);

    for section in &result.new_script.sections {
        panel = panel.push(text(format!("[{}]", section.section_name)));
        panel = panel.push(text(format!("Visual: {}", section.visual_cue)));
        panel = panel.push(text(section.spoken_audio.clone()));
    }

    panel = panel.push(text("Full script"));
    panel = panel.push(text(full_script_text(&result.new_script)));
    panel
}
