use crate::models::{Grouped, News};
use crate::panels::{self, element, text};
use crate::{config, Error};
use web_sys::{Document, Element};

/// One page per news category, each row tagged with its category.
pub(crate) async fn load(document: Document) -> Result<(), Error> {
    let news: Grouped<News> = panels::fetch(config::NEWS_DATA).await?;
    let panel = panels::find(&document, config::NEWS_PANEL)?;
    let pages = pages(&news)
        .into_iter()
        .map(|(category, items)| page(&document, category, items))
        .collect::<Result<Vec<_>, _>>()?;
    panels::fill(&panel, pages, true)
}

/// One page per category, in the order the categories were served. Empty
/// categories still get a page.
pub fn pages(news: &Grouped<News>) -> Vec<(&str, &[News])> {
    news.iter()
        .map(|(category, items)| (category.as_str(), items.as_slice()))
        .collect()
}

fn page(document: &Document, category: &str, items: &[News]) -> Result<Element, Error> {
    let page = panels::page(document)?;
    for item in items {
        let row = element(document, "div", &format!("news-item {category}"))?;
        let link = text(document, "a", "", &item.title)?;
        link.set_attribute("href", &item.link)?;
        row.append_child(&link)?;
        row.append_child(&text(document, "span", "", &item.pub_date)?.into())?;
        page.append_child(&row)?;
    }
    Ok(page)
}
