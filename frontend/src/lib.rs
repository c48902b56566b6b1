pub mod styles;
pub mod pages;
pub mod config;

use yew::prelude::*;
use crate::pages::games::frontend_wheel_game::FrontendWheelGame;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class={styles::CONTAINER}>
            <FrontendWheelGame />
        </main>
    }
}
