use yew::prelude::*;
use wof_shared::constants::{NOT_A_LETTER_MESSAGE, NOT_ENOUGH_MONEY_MESSAGE};
use wof_shared::{Effect, GuessOutcome};

pub fn format_money(amount: i32) -> String {
    if amount < 0 {
        format!("-£{}", -amount)
    } else {
        format!("£{}", amount)
    }
}

/// Player-facing line for one transition effect.
pub fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::StartingPlayer { player } => format!("Player {} spins first", player),
        Effect::PrizeAwarded { amount, .. } => format!("+{}", format_money(*amount)),
        Effect::Bankrupt { player } => format!("Player {} bankrupt", player),
        Effect::TurnSkipped { .. } => "Lose a turn".to_string(),
        Effect::TurnPassed { next_player } => format!("Next up: Player {}", next_player),
        Effect::GuessRejected { letter, outcome } => match outcome {
            GuessOutcome::AlreadyFound => format!("'{}' has already been found", letter),
            GuessOutcome::NotALetter => NOT_A_LETTER_MESSAGE.to_string(),
            GuessOutcome::VowelNeedsPayment => NOT_ENOUGH_MONEY_MESSAGE.to_string(),
            GuessOutcome::VowelAccepted | GuessOutcome::ConsonantAccepted => String::new(),
        },
        Effect::VowelPurchased { cost, .. } => format!("-{} for vowel guess", format_money(*cost)),
        Effect::LettersRevealed { letter, reward, .. } => {
            format!("Guess '{}' was correct +{}", letter, format_money(*reward))
        }
        Effect::LetterMissed { letter } => format!("Guess '{}' was incorrect", letter),
        Effect::PhraseMissed { guess } => format!("Guess '{}' was incorrect", guess),
        Effect::GameWon { player, .. } => format!("Player {} wins!", player),
    }
}

#[derive(Properties, PartialEq)]
pub struct EffectMessagesProps {
    pub effects: Vec<Effect>,
    #[prop_or_default]
    pub notice: Option<String>,
}

#[function_component(EffectMessages)]
pub fn effect_messages(props: &EffectMessagesProps) -> Html {
    let lines: Vec<String> = props
        .effects
        .iter()
        .map(describe_effect)
        .filter(|line| !line.is_empty())
        .chain(props.notice.iter().cloned())
        .collect();

    if lines.is_empty() {
        return html! {};
    }

    let is_bad = props.effects.iter().any(|e| {
        matches!(
            e,
            Effect::Bankrupt { .. }
                | Effect::GuessRejected { .. }
                | Effect::LetterMissed { .. }
                | Effect::PhraseMissed { .. }
        )
    }) || props.notice.is_some();

    html! {
        <div class="mt-4 mb-4 flex flex-col items-center justify-center space-y-1">
            {
                for lines.iter().map(|line| html! {
                    <p class={classes!(
                        "px-4", "py-2", "rounded-lg", "text-center", "font-medium",
                        if is_bad {
                            "text-red-600 bg-red-50 dark:bg-red-900/20"
                        } else {
                            "text-green-600 bg-green-50 dark:bg-green-900/20"
                        }
                    )}>{line.clone()}</p>
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin the Wheel" };

    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={props.is_spinning}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 bg-transparent focus:outline-none focus:ring-4 focus:ring-yellow-300"
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}
