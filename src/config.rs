use std::ops::RangeInclusive;

pub(crate) const BANNER_SLIDER: &str = ".banner .slider-container";
pub(crate) const BANNER_DOTS: &str = ".banner .dots";
/// Milliseconds between banner pages.
pub(crate) const BANNER_INTERVAL: u32 = 3000;

pub(crate) const NEWS_PANEL: &str = ".news-list";
pub(crate) const NEWS_DATA: &str = "./data/news.json";

pub(crate) const HERO_PANEL: &str = ".hero-list";
pub(crate) const HERO_DATA: &str = "./data/hero.json";
/// Hero categories, each shown on its own page after the hot heroes.
pub(crate) const HERO_TYPES: RangeInclusive<u8> = 1..=6;
const HERO_PORTRAITS: &str = "https://game.gtimg.cn/images/yxzj/img201606/heroimg";

pub(crate) const VIDEO_PANEL: &str = ".video-list";
pub(crate) const VIDEO_DATA: &str = "./data/video.json";

pub(crate) fn hero_portrait(ename: u32) -> String {
    format!("{HERO_PORTRAITS}/{ename}/{ename}.jpg")
}
