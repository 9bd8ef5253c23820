use crate::models::Hero;
use crate::panels::{self, element, text};
use crate::{config, Error};
use web_sys::{Document, Element};

pub(crate) async fn load(document: Document) -> Result<(), Error> {
    let heroes: Vec<Hero> = panels::fetch(config::HERO_DATA).await?;
    let panel = panels::find(&document, config::HERO_PANEL)?;
    let pages = pages(&heroes)
        .iter()
        .map(|heroes| page(&document, heroes))
        .collect::<Result<Vec<_>, _>>()?;
    panels::fill(&panel, pages, false)
}

/// Hot heroes first, then one page per hero type. A hero with a second type
/// appears on both type pages.
pub fn pages(heroes: &[Hero]) -> Vec<Vec<&Hero>> {
    let mut pages = Vec::with_capacity(1 + config::HERO_TYPES.count());
    pages.push(heroes.iter().filter(|hero| hero.is_hot()).collect());
    for hero_type in config::HERO_TYPES {
        pages.push(
            heroes
                .iter()
                .filter(|hero| hero.has_type(hero_type))
                .collect(),
        );
    }
    pages
}

fn page(document: &Document, heroes: &[&Hero]) -> Result<Element, Error> {
    let page = panels::page(document)?;
    for hero in heroes {
        let link = element(document, "a", "")?;
        let portrait = element(document, "img", "")?;
        portrait.set_attribute("src", &config::hero_portrait(hero.ename))?;
        link.append_child(&portrait)?;
        link.append_child(&text(document, "span", "", &hero.cname)?.into())?;
        page.append_child(&link)?;
    }
    Ok(page)
}
