//! Dataset upload form.
//!
//! Holds the chosen file and target backend locally and hands both to the
//! parent on submit. Validation (no file chosen) and the request itself are
//! the parent's business, so a submit without a file is forwarded as `None`.

use common::model::entity::EntityKind;
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadProps {
    /// Invoked with the chosen file (if any) and the backend it is meant for.
    pub on_upload: Callback<(Option<File>, EntityKind)>,

    /// Disables the submit button while an upload is in flight.
    #[prop_or_default]
    pub busy: bool,
}

pub enum Msg {
    FileChosen(Option<File>),
    KindChosen(EntityKind),
    Submit,
}

pub struct UploadForm {
    file: Option<File>,
    kind: EntityKind,
}

impl Component for UploadForm {
    type Message = Msg;
    type Properties = UploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file: None,
            kind: EntityKind::Table,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => {
                self.file = file;
                true
            }
            Msg::KindChosen(kind) => {
                self.kind = kind;
                true
            }
            Msg::Submit => {
                ctx.props().on_upload.emit((self.file.clone(), self.kind));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onchange_file = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FileChosen(input.files().and_then(|files| files.get(0)))
        });
        let onchange_kind = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::KindChosen(parse_kind(&select.value()))
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="file-upload">
                <h2>{"Upload Dataset"}</h2>
                <form {onsubmit}>
                    <div class="form-group">
                        <label for="file-input">{"Select File:"}</label>
                        <input type="file" id="file-input" class="file-input" onchange={onchange_file} />
                        {
                            match &self.file {
                                Some(file) => html! { <span class="file-name">{ file.name() }</span> },
                                None => html! {},
                            }
                        }
                    </div>
                    <div class="form-group">
                        <label>{"Select Database:"}</label>
                        <select onchange={onchange_kind}>
                            <option value="mysql" selected={self.kind == EntityKind::Table}>{"Relational (tables)"}</option>
                            <option value="mongodb" selected={self.kind == EntityKind::Collection}>{"Document (collections)"}</option>
                        </select>
                    </div>
                    <button type="submit" disabled={ctx.props().busy}>{"Upload"}</button>
                </form>
            </div>
        }
    }
}

/// Maps the `<select>` value back to a kind; anything unknown is a table.
fn parse_kind(value: &str) -> EntityKind {
    match value {
        "mongodb" => EntityKind::Collection,
        _ => EntityKind::Table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_match_backend_selectors() {
        for kind in [EntityKind::Table, EntityKind::Collection] {
            assert_eq!(parse_kind(kind.database_tag()), kind);
        }
    }
}
