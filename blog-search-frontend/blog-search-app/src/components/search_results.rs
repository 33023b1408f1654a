use crate::{
    config::SearchConfig,
    highlight::{highlight, Fragment},
    widget::PanelContent,
};
use blog_search_api_types::SearchResult;
use leptos::prelude::*;

/// `title` with every occurrence of `query` wrapped in `<mark>`.
#[component]
pub fn HighlightedTitle(#[prop(into)] title: String, #[prop(into)] query: String) -> impl IntoView {
    highlight(&title, &query)
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Plain(text) => text.into_any(),
            Fragment::Marked(text) => view! { <mark>{text}</mark> }.into_any(),
        })
        .collect_view()
}

#[component]
pub fn ResultItem(
    post: SearchResult,
    #[prop(into)] query: String,
    #[prop(into)] link_prefix: String,
) -> impl IntoView {
    let SearchResult {
        slug,
        title,
        date_str,
        tags,
        ..
    } = post;
    view! {
        <div class="result-item">
            <a href=format!("{link_prefix}{slug}")>
                <HighlightedTitle title query />
            </a>
            <div class="result-meta">
                <span class="result-date">{date_str}</span>
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{format!("#{tag}")}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn PanelContents(content: PanelContent, config: SearchConfig) -> impl IntoView {
    match content {
        PanelContent::Blank => ().into_any(),
        PanelContent::Results { query, results } => results
            .into_iter()
            .take(config.max_results)
            .map(|post| {
                view! {
                    <ResultItem
                        post
                        query=query.clone()
                        link_prefix=config.link_prefix.clone()
                    />
                }
            })
            .collect_view()
            .into_any(),
        PanelContent::NoResults { query } => {
            let message = config.empty_message.replace("{query}", &query);
            view! { <div class="no-result">{message}</div> }.into_any()
        }
        PanelContent::Failure => {
            view! { <div class="search-error">{config.failure_message}</div> }.into_any()
        }
    }
}
