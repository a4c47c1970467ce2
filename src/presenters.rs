use crate::app::controller::ArtworkView;
use crate::resources::{AssetIndex, StringTable};

pub fn present_artwork_row(
    view: &ArtworkView<'_>,
    strings: &StringTable,
    assets: &AssetIndex,
) -> String {
    let image = assets
        .resolve(&view.refs.image)
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<missing>".to_string());
    format!(
        "{}\t{}\t{}\t{}\t{}",
        view.index,
        if view.is_favorite { "*" } else { "-" },
        strings.resolve(&view.refs.title),
        strings.resolve(&view.refs.caption),
        image
    )
}

pub fn present_artwork_detail(
    view: &ArtworkView<'_>,
    previous: usize,
    next: usize,
    strings: &StringTable,
) -> String {
    format!(
        "artwork {} ({})\n  title:    {}\n  caption:  {}\n  image:    {}\n  previous: {}\n  next:     {}",
        view.index,
        view.position_label(),
        strings.resolve(&view.refs.title),
        strings.resolve(&view.refs.caption),
        view.refs.image,
        previous,
        next
    )
}
