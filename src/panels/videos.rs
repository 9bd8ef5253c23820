use crate::models::{Grouped, Video};
use crate::panels::{self, element, text};
use crate::{config, Error};
use web_sys::{Document, Element};

pub(crate) async fn load(document: Document) -> Result<(), Error> {
    let videos: Grouped<Video> = panels::fetch(config::VIDEO_DATA).await?;
    let panel = panels::find(&document, config::VIDEO_PANEL)?;
    let pages = pages(&videos)
        .into_iter()
        .map(|videos| page(&document, videos))
        .collect::<Result<Vec<_>, _>>()?;
    panels::fill(&panel, pages, true)
}

/// One page per category, in the order the categories were served.
pub fn pages(videos: &Grouped<Video>) -> Vec<&[Video]> {
    videos.values().map(Vec::as_slice).collect()
}

fn page(document: &Document, videos: &[Video]) -> Result<Element, Error> {
    let page = panels::page(document)?;
    for video in videos {
        let link = element(document, "a", "")?;
        link.set_attribute("href", &video.link)?;

        let cover = element(document, "img", "")?;
        cover.set_attribute("src", &video.cover)?;
        link.append_child(&cover)?;
        link.append_child(&text(document, "div", "title", &video.title)?.into())?;

        let aside = element(document, "div", "aside")?;
        let play = element(document, "div", "play")?;
        play.append_child(&element(document, "span", "spr spr_videonum")?.into())?;
        play.append_child(&text(document, "span", "", &video.play_number)?.into())?;
        aside.append_child(&play)?;
        aside.append_child(&text(document, "div", "time", &video.pub_date)?.into())?;
        link.append_child(&aside)?;

        page.append_child(&link)?;
    }
    Ok(page)
}
