use yew::prelude::*;
use wof_shared::constants::VOWELS;

#[derive(Properties, PartialEq)]
pub struct KeyboardProps {
    pub revealed_phrase: String,
    pub missed_letters: Vec<char>,
    pub vowel_cost: i32,
    #[prop_or_default]
    pub on_key_press: Option<Callback<char>>,
}

#[function_component(Keyboard)]
pub fn keyboard(props: &KeyboardProps) -> Html {
    let rows = vec![
        "qwertyuiop".chars().collect::<Vec<_>>(),
        "asdfghjkl".chars().collect::<Vec<_>>(),
        "zxcvbnm".chars().collect::<Vec<_>>(),
    ];

    html! {
        <div class="keyboard mt-6 w-full">
            {
                for rows.iter().map(|row| {
                    html! {
                        <div class="flex justify-center mb-2 w-full">
                            {
                                for row.iter().map(|&letter| {
                                    let found = props.revealed_phrase.contains(letter);
                                    let missed = props.missed_letters.contains(&letter);
                                    let is_vowel = VOWELS.contains(&letter);

                                    let status_class = if found {
                                        "bg-green-500 text-black"
                                    } else if missed {
                                        "bg-red-300 dark:bg-red-400 text-black dark:text-black"
                                    } else if is_vowel {
                                        "bg-yellow-300 dark:bg-yellow-500 text-gray-900"
                                    } else {
                                        "bg-gray-200 dark:bg-gray-700 text-gray-900 dark:text-white"
                                    };

                                    let onclick = props.on_key_press.clone().map(|callback| {
                                        Callback::from(move |_: MouseEvent| callback.emit(letter))
                                    });

                                    html! {
                                        <button
                                            type="button"
                                            title={if is_vowel { Some(format!("costs £{}", props.vowel_cost)) } else { None }}
                                            class={classes!(
                                                "w-7", "h-9", "md:w-8", "md:h-10",
                                                "flex", "items-center", "justify-center",
                                                "text-sm", "font-bold",
                                                "rounded", "mx-0.5", "cursor-pointer",
                                                status_class
                                            )}
                                            {onclick}
                                        >
                                            { letter.to_ascii_uppercase() }
                                        </button>
                                    }
                                })
                            }
                        </div>
                    }
                })
            }
        </div>
    }
}
