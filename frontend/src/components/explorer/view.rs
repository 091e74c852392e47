//! View rendering for the explorer component.
//!
//! Everything shown comes from the controller's `SessionView`; the view never
//! looks at the session slots directly. Layout: upload form on top, entity
//! lists on the left, then details, sample queries and construct queries
//! side by side, with the question box underneath.

use common::model::details::Column;
use common::model::entity::EntityKind;
use common::model::query::Construct;
use web_sys::{File, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::data_sources::upload::UploadForm;
use crate::session::{LoadStatus, SessionPhase, SessionView};

use super::helpers::{empty_list_text, pretty_json};
use super::messages::Msg;
use super::state::ExplorerComponent;

/// Main view function for the explorer component.
pub fn view(component: &ExplorerComponent, ctx: &Context<ExplorerComponent>) -> Html {
    let link = ctx.link();
    let session = component.controller.view();

    html! {
        <div class="database-explorer">
            <div class="upload-section">
                <UploadForm
                    busy={session.uploading}
                    on_upload={link.callback(|(file, kind): (Option<File>, EntityKind)| Msg::Upload(file, kind))}
                />
            </div>
            { build_banners(component, &session, link) }
            <div class="explorer-body">
                { build_sidebar(&session, link) }
                <main class="main-content">
                    <div class="content-container">
                        { build_details(&session) }
                        { build_sample_queries(&session, link) }
                        { build_construct_queries(&session, link) }
                    </div>
                    { build_translation(component, &session, link) }
                </main>
            </div>
        </div>
    }
}

/// Backend error (dismissable), rejected command and upload confirmation.
fn build_banners(
    component: &ExplorerComponent,
    session: &SessionView<'_>,
    link: &Scope<ExplorerComponent>,
) -> Html {
    let error = match session.last_error {
        Some(e) => html! {
            <div class="error-banner" role="alert">
                <span>{ e.to_string() }</span>
                <button onclick={link.callback(|_| Msg::DismissError)}>{"Dismiss"}</button>
            </div>
        },
        None => html! {},
    };
    let validation = match &component.validation {
        Some(e) => html! { <p class="validation">{ e.to_string() }</p> },
        None => html! {},
    };
    let notice = match session.notice {
        Some(message) => html! { <div class="notice">{ message.to_string() }</div> },
        None => html! {},
    };

    html! {
        <>
            { error }
            { validation }
            { notice }
        </>
    }
}

fn build_sidebar(session: &SessionView<'_>, link: &Scope<ExplorerComponent>) -> Html {
    let tables = session.tables.iter().map(|table| {
        let name = table.clone();
        let selected = session.is_table_selected(table);
        html! {
            <li
                key={table.clone()}
                class={classes!(selected.then_some("selected"))}
                onclick={link.callback(move |_| Msg::SelectTable(name.clone()))}
            >
                { table.clone() }
            </li>
        }
    });
    let collections = session.collections.iter().map(|collection| {
        let name = collection.clone();
        let selected = session.is_collection_selected(collection);
        html! {
            <li
                key={collection.clone()}
                class={classes!(selected.then_some("selected"))}
                onclick={link.callback(move |_| Msg::SelectCollection(name.clone()))}
            >
                { collection.clone() }
            </li>
        }
    });

    html! {
        <aside class="sidebar">
            <h3>{"Tables"}</h3>
            <ul>{ for tables }</ul>
            <h3>{"Collections"}</h3>
            <ul>{ for collections }</ul>
            {
                if session.selected.is_some() {
                    html! {
                        <button onclick={link.callback(|_| Msg::ClearSelection)}>
                            {"Clear selection"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </aside>
    }
}

fn build_details(session: &SessionView<'_>) -> Html {
    let body = match (session.phase(), session.selected, session.details) {
        (SessionPhase::Ready, Some(entity), Some(details)) => html! {
            <div>
                <h4>{ format!("Details for {}", entity) }</h4>
                { build_columns(details.columns()) }
                <h5>{"Sample records"}</h5>
                { for details.samples().iter().map(|sample| html! { <pre>{ pretty_json(sample) }</pre> }) }
            </div>
        },
        (SessionPhase::Pending, Some(entity), _) if session.details_status == LoadStatus::Loading => html! {
            <p>{ format!("Loading details for {}…", entity) }</p>
        },
        _ => html! {},
    };

    html! { <div class="details">{ body }</div> }
}

fn build_columns(columns: &[Column]) -> Html {
    if columns.is_empty() {
        return html! {};
    }

    html! {
        <table class="columns">
            <thead>
                <tr>
                    <th>{"Column"}</th>
                    <th>{"Type"}</th>
                    <th>{"Null"}</th>
                    <th>{"Key"}</th>
                </tr>
            </thead>
            <tbody>
                { for columns.iter().map(|column| html! {
                    <tr key={column.name.clone()}>
                        <td>{ column.name.clone() }</td>
                        <td>{ column.data_type.clone() }</td>
                        <td>{ column.nullable.clone().unwrap_or_default() }</td>
                        <td>{ column.key.clone().unwrap_or_default() }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn build_sample_queries(session: &SessionView<'_>, link: &Scope<ExplorerComponent>) -> Html {
    if session.selected.is_none() {
        return html! { <div class="sample-queries" /> };
    }

    let list = if session.sample_queries.is_empty() {
        html! { <p>{ empty_list_text(session.samples_status, "sample queries") }</p> }
    } else {
        html! {
            <div>
                <h4>{"Sample Queries"}</h4>
                <ul>
                    { for session.sample_queries.iter().map(|query| html! {
                        <li>
                            <strong>{ query.description.clone() }</strong>
                            <pre>{ query.query_text.clone() }</pre>
                        </li>
                    }) }
                </ul>
            </div>
        }
    };

    html! {
        <div class="sample-queries">
            <button
                onclick={link.callback(|_| Msg::FetchSampleQueries)}
                disabled={session.samples_status == LoadStatus::Loading}
            >
                {"Get Sample Queries"}
            </button>
            { list }
        </div>
    }
}

fn build_construct_queries(session: &SessionView<'_>, link: &Scope<ExplorerComponent>) -> Html {
    let buttons = Construct::ALL.iter().map(|&construct| {
        let active = session.construct == Some(construct);
        html! {
            <button
                class={classes!(active.then_some("active"))}
                onclick={link.callback(move |_| Msg::FetchConstructQueries(construct))}
            >
                { construct.label() }
            </button>
        }
    });

    let list = if session.construct_queries.is_empty() {
        html! { <p>{ empty_list_text(session.constructs_status, "construct-based queries") }</p> }
    } else {
        html! {
            <ul class="construct-queries-content">
                { for session.construct_queries.iter().map(|query| html! {
                    <li>
                        <strong>{ query.description.clone() }</strong>
                        <pre>{ query.query.render() }</pre>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="construct-based-queries">
            <h4>{"Construct-Based Queries"}</h4>
            <div class="construct-buttons">{ for buttons }</div>
            { list }
        </div>
    }
}

fn build_translation(
    component: &ExplorerComponent,
    session: &SessionView<'_>,
    link: &Scope<ExplorerComponent>,
) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateQuestion(input.value())
    });
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitQuestion
    });

    let result = match session.translation {
        Some(translation) => html! {
            <div class="translation-result">
                <strong>{ translation.input_text.clone() }</strong>
                <pre>{ translation.generated_query.clone() }</pre>
                { for translation.results.iter().map(|row| html! { <pre>{ pretty_json(row) }</pre> }) }
            </div>
        },
        None if session.translation_status == LoadStatus::Loading => html! { <p>{"Translating…"}</p> },
        None => html! {},
    };

    html! {
        <div class="translation">
            <h4>{"Ask a question"}</h4>
            <form {onsubmit}>
                <input
                    type="text"
                    placeholder="e.g. total price by city"
                    value={component.question.clone()}
                    {oninput}
                />
                <button type="submit" disabled={session.translation_status == LoadStatus::Loading}>
                    {"Translate"}
                </button>
            </form>
            { result }
        </div>
    }
}
