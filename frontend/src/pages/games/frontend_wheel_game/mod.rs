mod keyboard;
mod phrase_board;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use wof_shared::{Effect, Event, Phase, PublicPhraseGame, Session, SpinEngine};

use crate::config::{load_game_config, SETTLE_DELAY_MS, TICKS_PER_FRAME};
use crate::styles;
use keyboard::Keyboard;
use phrase_board::{GuessForm, GuessKind, PhraseBoard};
use wheel_canvas::WheelCanvas;
use wheel_utils::{format_money, EffectMessages, SpinButton};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Session plus what the last accepted event produced.
pub struct GameStore {
    session: Session,
    last_effects: Vec<Effect>,
    missed_letters: Vec<char>,
    notice: Option<String>,
}

impl Default for GameStore {
    fn default() -> Self {
        Self {
            session: Session::new(load_game_config(), &mut rand::thread_rng()),
            last_effects: Vec::new(),
            missed_letters: Vec::new(),
            notice: None,
        }
    }
}

impl Reducible for GameStore {
    type Action = Event;

    fn reduce(self: Rc<Self>, event: Event) -> Rc<Self> {
        let mut session = self.session.clone();
        let starts_over = matches!(event, Event::StartGame { .. } | Event::NewGame);
        let name = event.name();

        match session.apply(event, &mut rand::thread_rng()) {
            Ok(effects) => {
                let mut missed_letters = if starts_over {
                    Vec::new()
                } else {
                    self.missed_letters.clone()
                };
                for effect in &effects {
                    if let Effect::LetterMissed { letter } = effect {
                        if !missed_letters.contains(letter) {
                            missed_letters.push(*letter);
                        }
                    }
                }
                Rc::new(Self { session, last_effects: effects, missed_letters, notice: None })
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", name, e);
                Rc::new(Self {
                    session: self.session.clone(),
                    last_effects: Vec::new(),
                    missed_letters: self.missed_letters.clone(),
                    notice: Some(e.to_string()),
                })
            }
        }
    }
}

fn request_frame(f: &FrameCallback) {
    let Some(window) = window() else {
        log::error!("No window, cannot animate the wheel");
        return;
    };
    if let Some(callback) = f.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

fn scoreboard(public: &PublicPhraseGame) -> Html {
    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-6">
            {
                for public.balances.iter().enumerate().map(|(index, balance)| {
                    let active = index == public.current_player;
                    html! {
                        <div class={classes!(
                            "rounded-lg", "px-4", "py-3", "text-center",
                            if active {
                                "bg-blue-600 text-white shadow-lg"
                            } else {
                                "bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white"
                            }
                        )}>
                            <div class="text-sm font-medium">{format!("Player {}", index + 1)}</div>
                            <div class="text-xl font-bold">{format_money(*balance)}</div>
                        </div>
                    }
                })
            }
        </div>
    }
}

#[function_component(FrontendWheelGame)]
pub fn frontend_wheel_game() -> Html {
    let store = use_reducer(GameStore::default);
    let rotation = use_state(|| 0.0_f64);
    let wheel_busy = use_mut_ref(|| false);

    let session = &store.session;
    let phase = session.phase();
    let public = session.game().to_public();
    let config = session.config();

    let on_spin = {
        let dispatcher = store.dispatcher();
        let rotation = rotation.clone();
        let wheel_busy = wheel_busy.clone();

        Callback::from(move |_: MouseEvent| {
            // Only one animation loop per spin, even if clicks beat the re-render.
            if *wheel_busy.borrow() || !phase.accepts_spin() {
                log::debug!("Spin ignored while {:?}", phase);
                return;
            }
            *wheel_busy.borrow_mut() = true;
            dispatcher.dispatch(Event::BeginSpin);

            let wheel = Rc::new(RefCell::new(SpinEngine::resume_from(*rotation, &mut rand::thread_rng())));
            let f: FrameCallback = Rc::new(RefCell::new(None));
            let g = f.clone();
            let rotation = rotation.clone();
            let dispatcher = dispatcher.clone();
            let wheel_busy = wheel_busy.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let landed = {
                    let mut wheel = wheel.borrow_mut();
                    for _ in 0..TICKS_PER_FRAME {
                        let increment = wheel.step();
                        if increment == 0.0 {
                            break;
                        }
                        wheel.apply_rotation(increment);
                    }
                    rotation.set(wheel.rotation());
                    wheel.is_finished().then(|| (wheel.landed_sector(), wheel.ticks()))
                };

                match landed {
                    Some((sector, ticks)) => {
                        log::debug!("Wheel at rest on sector {} after {} ticks", sector, ticks);
                        let dispatcher = dispatcher.clone();
                        let wheel_busy = wheel_busy.clone();
                        Timeout::new(SETTLE_DELAY_MS, move || {
                            dispatcher.dispatch(Event::SpinLanded { sector });
                            *wheel_busy.borrow_mut() = false;
                        })
                        .forget();
                        let _ = f.borrow_mut().take();
                    }
                    None => request_frame(&f),
                }
            }) as Box<dyn FnMut()>));

            request_frame(&g);
        })
    };

    let send = |event: Event| {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(event.clone()))
    };

    let on_letter = {
        let dispatcher = store.dispatcher();
        Callback::from(move |letter: char| dispatcher.dispatch(Event::GuessLetter(letter)))
    };

    let on_phrase = {
        let dispatcher = store.dispatcher();
        Callback::from(move |guess: String| dispatcher.dispatch(Event::GuessPhrase(guess)))
    };

    let current_player = session.game().display_current_player();
    let is_spinning = phase == Phase::Spinning;
    let letter_turn = phase == Phase::AwaitingLetterGuess;

    let body = match phase {
        Phase::ChoosingPlayers => html! {
            <div class="flex flex-col items-center space-y-6 py-8">
                <h2 class={styles::TEXT_H2}>{"How many players?"}</h2>
                <div class="flex space-x-4">
                    {
                        for (config.min_players..=config.max_players).map(|players| html! {
                            <button
                                class={classes!(styles::BUTTON_PRIMARY, "w-16", "h-16", "text-2xl")}
                                onclick={send(Event::StartGame { players })}
                            >
                                {players.to_string()}
                            </button>
                        })
                    }
                </div>
            </div>
        },
        Phase::AwaitingSpin | Phase::Spinning => html! {
            <div class="flex flex-col items-center space-y-6">
                <p class={styles::TEXT_BODY}>{format!("Player {}, spin the wheel", current_player)}</p>
                <WheelCanvas rotation={*rotation} is_spinning={is_spinning} />
                <div class="w-full max-w-xs">
                    <SpinButton is_spinning={is_spinning} onclick={on_spin.clone()} />
                </div>
            </div>
        },
        Phase::AwaitingLetterGuess => html! {
            <div class="flex flex-col items-center">
                <p class={classes!(styles::TEXT_BODY, "mb-4")}>
                    {format!(
                        "Player {} has {}. Vowels cost {}.",
                        current_player,
                        format_money(session.game().current_player_balance()),
                        format_money(session.game().vowel_cost())
                    )}
                </p>
                <GuessForm kind={GuessKind::Letter} on_letter={on_letter.clone()} />
            </div>
        },
        Phase::LetterCorrect => html! {
            <div class="flex justify-center space-x-4 py-4">
                <SpinButton is_spinning={false} onclick={on_spin.clone()} />
                <button class={styles::BUTTON_SECONDARY} onclick={send(Event::RequestPhraseGuess)}>
                    {"Guess the phrase"}
                </button>
            </div>
        },
        Phase::AwaitingPhraseGuess => html! {
            <div class="flex flex-col items-center">
                <GuessForm kind={GuessKind::Phrase} on_phrase={on_phrase.clone()} />
                <button class={styles::BUTTON_SECONDARY} onclick={send(Event::CancelPhraseGuess)}>
                    {"Back"}
                </button>
            </div>
        },
        Phase::TurnOver => html! {
            <div class="flex justify-center py-4">
                <button class={styles::BUTTON_PRIMARY} onclick={send(Event::Continue)}>
                    {format!("Player {}, you're up", current_player)}
                </button>
            </div>
        },
        Phase::Won => html! {
            <div class="flex flex-col items-center space-y-3 py-6 text-center">
                <h2 class={styles::TEXT_H1}>{"Congratulations!"}</h2>
                <p class={styles::TEXT_BODY}>
                    {format!("Player {} solved \"{}\"", current_player, public.solution.clone().unwrap_or_default())}
                </p>
                <p class={styles::TEXT_BODY}>
                    {format!(
                        "Winnings {} + bonus {} = {}",
                        format_money(session.game().current_player_balance()),
                        format_money(session.game().bonus_money()),
                        format_money(session.game().total_prize())
                    )}
                </p>
                <button class={styles::BUTTON_PRIMARY} onclick={send(Event::NewGame)}>
                    {"New game"}
                </button>
            </div>
        },
    };

    html! {
        <div class="max-w-3xl mx-auto py-8">
            <div class={styles::CARD}>
                <h1 class={classes!(styles::TEXT_H1, "text-center", "mb-6")}>{"Wheel of Fortune"}</h1>
                if phase != Phase::ChoosingPlayers {
                    { scoreboard(&public) }
                    <PhraseBoard revealed_phrase={public.revealed_phrase.clone()} />
                    <p class={classes!(styles::TEXT_SMALL, "text-center")}>
                        {format!("Guesses left for the bonus: {}", public.guess_budget)}
                    </p>
                }
                <EffectMessages effects={store.last_effects.clone()} notice={store.notice.clone()} />
                { body }
                if phase != Phase::ChoosingPlayers && phase != Phase::Won {
                    <Keyboard
                        revealed_phrase={public.revealed_phrase.clone()}
                        missed_letters={store.missed_letters.clone()}
                        vowel_cost={session.game().vowel_cost()}
                        on_key_press={letter_turn.then(|| on_letter.clone())}
                    />
                }
            </div>
        </div>
    }
}
