use yew::prelude::*;
use web_sys::HtmlInputElement;
use wof_shared::constants::{EMPTY_GUESS_MESSAGE, MASK_CHAR};
use wof_shared::validation::{validate_letter_input, validate_phrase_input};

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PhraseBoardProps {
    pub revealed_phrase: String,
}

/// One tile per character; spaces split the phrase into words.
#[function_component(PhraseBoard)]
pub fn phrase_board(props: &PhraseBoardProps) -> Html {
    let words: Vec<&str> = props.revealed_phrase.split(' ').collect();

    html! {
        <div class="phrase-board w-full max-w-2xl mx-auto flex flex-wrap justify-center gap-x-6 gap-y-3 mb-6">
            {
                for words.iter().map(|word| html! {
                    <div class="flex">
                        {
                            for word.chars().map(|c| {
                                let hidden = c == MASK_CHAR;
                                html! {
                                    <div class="mx-0.5">
                                        <div class={classes!(
                                            "w-9", "h-11", "md:w-11", "md:h-14",
                                            "flex", "items-center", "justify-center",
                                            "text-xl", "md:text-2xl", "font-bold", "rounded",
                                            if hidden {
                                                "bg-blue-600 text-blue-600"
                                            } else {
                                                "bg-white text-gray-900 border-2 border-blue-600"
                                            }
                                        )}>
                                            { if hidden { ' ' } else { c.to_ascii_uppercase() } }
                                        </div>
                                    </div>
                                }
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum GuessKind {
    Letter,
    Phrase,
}

#[derive(Properties, PartialEq)]
pub struct GuessFormProps {
    pub kind: GuessKind,
    #[prop_or_default]
    pub on_letter: Option<Callback<char>>,
    #[prop_or_default]
    pub on_phrase: Option<Callback<String>>,
}

/// Text box plus submit button. The letter form takes the first character
/// typed; the phrase form passes the text through untouched.
#[function_component(GuessForm)]
pub fn guess_form(props: &GuessFormProps) -> Html {
    let input_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    let on_submit = {
        let input_ref = input_ref.clone();
        let error = error.clone();
        let kind = props.kind;
        let on_letter = props.on_letter.clone();
        let on_phrase = props.on_phrase.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let text = input.value();

            let accepted = match kind {
                GuessKind::Letter => validate_letter_input(&text).map(|letter| {
                    if let Some(callback) = &on_letter {
                        callback.emit(letter);
                    }
                }),
                GuessKind::Phrase => validate_phrase_input(&text).map(|_| {
                    if let Some(callback) = &on_phrase {
                        callback.emit(text.clone());
                    }
                }),
            };

            match accepted {
                Ok(()) => {
                    input.set_value("");
                    error.set(None);
                }
                Err(e) => {
                    log::debug!("Guess rejected before submit: {}", e.code);
                    error.set(Some(EMPTY_GUESS_MESSAGE.to_string()));
                }
            }
        })
    };

    let (input_class, placeholder, maxlength) = match props.kind {
        GuessKind::Letter => ("w-20 h-20 text-center text-5xl font-bold", "?", Some("1")),
        GuessKind::Phrase => ("w-full max-w-md h-12 text-center text-2xl", "Guess the phrase", None),
    };

    html! {
        <form onsubmit={on_submit} class="flex flex-col items-center space-y-3 mb-4">
            <input
                ref={input_ref}
                type="text"
                autocomplete="off"
                placeholder={placeholder}
                maxlength={maxlength}
                class={classes!(styles::INPUT_GUESS, input_class)}
            />
            if let Some(message) = &*error {
                <p class={styles::TEXT_ERROR}>{message.clone()}</p>
            }
            <button type="submit" class={styles::BUTTON_PRIMARY}>
                {"Guess"}
            </button>
        </form>
    }
}
