//! Explorer: root module wiring the Yew `Component` implementation with
//! submodules for state, messages, update logic, view rendering, and helpers.
//!
//! On first render the component asks the host for its configuration and
//! then loads both catalogs (tables and collections).

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

use crate::config::load_config;
pub use messages::Msg;
pub use state::ExplorerComponent;

impl Component for ExplorerComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ExplorerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let config = load_config().await;
                link.send_message(Msg::ConfigLoaded(config));
            });
        }
    }
}
