//! Typewriter text that types, pauses, deletes and moves on to the next
//! sentence.

#[cfg(test)]
#[path = "text_type_test.rs"]
mod text_type_test;

use gloo_timers::callback::Timeout;
use web_sys::js_sys;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    Pausing,
    Deleting,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeEvent {
    Typed,
    /// Sentence `index` is now fully visible.
    SentenceTyped(usize),
    Paused,
    Deleted,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeedRange {
    pub min_ms: u32,
    pub max_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypingSpeeds {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
    /// Overrides `typing_ms` with a random value per keystroke.
    pub variable: Option<SpeedRange>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    sentences: Vec<String>,
    index: usize,
    shown: usize,
    phase: TypePhase,
    looped: bool,
}

impl Typewriter {
    pub fn new(sentences: Vec<String>, looped: bool) -> Self {
        let phase = if sentences.is_empty() {
            TypePhase::Finished
        } else {
            TypePhase::Typing
        };
        Self {
            sentences,
            index: 0,
            shown: 0,
            phase,
            looped,
        }
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn current_len(&self) -> usize {
        self.sentences
            .get(self.index)
            .map_or(0, |sentence| sentence.chars().count())
    }

    pub fn visible(&self) -> String {
        self.sentences
            .get(self.index)
            .map(|sentence| sentence.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    pub fn step(&mut self) -> TypeEvent {
        match self.phase {
            TypePhase::Typing => {
                self.shown = (self.shown + 1).min(self.current_len());
                if self.shown == self.current_len() {
                    self.phase = TypePhase::Pausing;
                    TypeEvent::SentenceTyped(self.index)
                } else {
                    TypeEvent::Typed
                }
            }
            TypePhase::Pausing => {
                let last = self.index + 1 == self.sentences.len();
                if last && !self.looped {
                    self.phase = TypePhase::Finished;
                    TypeEvent::Finished
                } else {
                    self.phase = TypePhase::Deleting;
                    TypeEvent::Paused
                }
            }
            TypePhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.sentences.len();
                    self.phase = TypePhase::Typing;
                }
                TypeEvent::Deleted
            }
            TypePhase::Finished => TypeEvent::Finished,
        }
    }

    /// Delay before the next [`step`](Self::step). `random` is a sample in
    /// `[0, 1)`, used only for variable typing speed.
    pub fn delay_ms(&self, speeds: &TypingSpeeds, random: f64) -> Option<u32> {
        match self.phase {
            TypePhase::Typing => Some(match speeds.variable {
                Some(range) => {
                    let span = f64::from(range.max_ms.saturating_sub(range.min_ms));
                    range.min_ms + (span * random.clamp(0.0, 1.0)).round() as u32
                }
                None => speeds.typing_ms,
            }),
            TypePhase::Pausing => Some(speeds.pause_ms),
            TypePhase::Deleting => Some(speeds.deleting_ms),
            TypePhase::Finished => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TextTypeProps {
    pub text: Vec<String>,
    #[prop_or(75)]
    pub typing_speed: u32,
    #[prop_or(30)]
    pub deleting_speed: u32,
    #[prop_or(1500)]
    pub pause_duration: u32,
    #[prop_or_default]
    pub variable_speed: Option<SpeedRange>,
    #[prop_or(true)]
    pub show_cursor: bool,
    #[prop_or(AttrValue::Static("|"))]
    pub cursor_character: AttrValue,
    #[prop_or(0.5)]
    pub cursor_blink_duration: f64,
    #[prop_or(true)]
    pub looped: bool,
    /// Called with the sentence and its index each time one is fully typed.
    #[prop_or_default]
    pub on_sentence_typed: Option<Callback<(String, usize)>>,
}

#[function_component(TextType)]
pub fn text_type(props: &TextTypeProps) -> Html {
    let writer = {
        let text = props.text.clone();
        let looped = props.looped;
        use_state(move || Typewriter::new(text, looped))
    };
    let speeds = TypingSpeeds {
        typing_ms: props.typing_speed,
        deleting_ms: props.deleting_speed,
        pause_ms: props.pause_duration,
        variable: props.variable_speed,
    };

    {
        let writer_handle = writer.clone();
        let on_sentence_typed = props.on_sentence_typed.clone();
        use_effect_with_deps(
            move |(state, speeds): &(Typewriter, TypingSpeeds)| {
                let timeout = state.delay_ms(speeds, js_sys::Math::random()).map(|delay| {
                    let mut next = state.clone();
                    Timeout::new(delay, move || {
                        if let TypeEvent::SentenceTyped(index) = next.step() {
                            if let Some(callback) = &on_sentence_typed {
                                callback.emit((next.visible(), index));
                            }
                        }
                        writer_handle.set(next);
                    })
                });
                move || drop(timeout)
            },
            ((*writer).clone(), speeds),
        );
    }

    html! {
        <span class="text-type">
            <span class="text-type-content">{ writer.visible() }</span>
            {
                if props.show_cursor {
                    html! {
                        <span
                            class="text-type-cursor"
                            style={format!("animation: textTypeBlink {}s steps(1) infinite alternate;", props.cursor_blink_duration)}
                        >
                            { props.cursor_character.clone() }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .text-type {
                    display: inline-block;
                    white-space: pre-wrap;
                }
                .text-type-cursor {
                    margin-left: 0.25rem;
                    display: inline-block;
                }
                @keyframes textTypeBlink {
                    from { opacity: 1; }
                    to { opacity: 0; }
                }
                "#}
            </style>
        </span>
    }
}
