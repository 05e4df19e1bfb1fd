use crate::Msg;

/// `MouseEvent.button` value for the main (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// What the platform observed about a click on an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkClick<'a> {
    /// Value of the anchor's `data-page` attribute, if present.
    pub page: Option<&'a str>,
    /// Value of the anchor's `data-post` attribute, if present.
    pub post: Option<&'a str>,
    /// Value of the anchor's `target` attribute, if present.
    pub target: Option<&'a str>,
    /// The anchor carries a `download` attribute.
    pub download: bool,
    pub button: i16,
    /// Any of ctrl, meta, shift or alt was held.
    pub modified: bool,
}

/// Decides whether a link click becomes an in-page navigation.
///
/// Returns `None` when the browser should handle the click itself, e.g. a
/// ctrl-click opening a new tab, a link aimed at another browsing context or
/// a download, or an anchor the navigator does not own.
pub fn route_link_click(click: &LinkClick<'_>) -> Option<Msg> {
    if click.modified || click.button != PRIMARY_BUTTON || click.download {
        return None;
    }
    if click
        .target
        .is_some_and(|target| !target.is_empty() && !target.eq_ignore_ascii_case("_self"))
    {
        return None;
    }
    if let Some(page) = click.page {
        return Some(Msg::OpenPage(page.to_string()));
    }
    click.post.map(|post| Msg::OpenPost(post.to_string()))
}
