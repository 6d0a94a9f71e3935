//! Social link list sanitization.

use serde_json::Value;

use super::coerce;
use super::defaults::{DEFAULT_LINK_PLATFORM, DEFAULT_LINK_URL};
use super::ids::IdSource;
use super::normalize::Sanitize;
use super::raw::RawNode;
use super::types::{LinkStyle, SocialLink};

/// Rebuilds a raw link array into well-formed [`SocialLink`]s.
///
/// Anything that is not an array yields an empty list. Non-object elements
/// are dropped, order is preserved, and links without a usable `id` get one
/// from `ids`. Duplicate ids are left as they are.
pub fn sanitize_links(raw: &Value, ids: &mut dyn IdSource) -> Vec<SocialLink> {
    sanitize_link_node(RawNode::new(raw), ids)
}

pub(crate) fn sanitize_link_node(raw: RawNode<'_>, ids: &mut dyn IdSource) -> Vec<SocialLink> {
    let Some(items) = raw.as_array() else {
        if raw.is_present() {
            tracing::warn!(kind = raw.kind(), "socialLinks is not an array; dropping it");
        }
        return Vec::new();
    };

    let links: Vec<SocialLink> = items
        .iter()
        .map(RawNode::new)
        .filter(|item| item.is_object())
        .map(|item| rebuild_link(item, ids))
        .collect();

    if links.len() < items.len() {
        tracing::debug!(
            dropped = items.len() - links.len(),
            "dropped non-object entries from socialLinks"
        );
    }

    links
}

fn rebuild_link(raw: RawNode<'_>, ids: &mut dyn IdSource) -> SocialLink {
    let id = coerce::optional_string(raw.field("id"), None).unwrap_or_else(|| ids.next_id());

    SocialLink {
        id,
        platform: coerce::enumeration(raw.field("platform"), DEFAULT_LINK_PLATFORM),
        url: coerce::string(raw.field("url"), DEFAULT_LINK_URL),
        active: coerce::boolean(raw.field("active"), true),
        label: coerce::optional_string(raw.field("label"), None),
        color: coerce::optional_string(raw.field("color"), None),
        style: LinkStyle::sanitize(raw.field("style"), &LinkStyle::default(), ids),
    }
}

impl Sanitize for LinkStyle {
    fn sanitize(raw: RawNode<'_>, defaults: &Self, _ids: &mut dyn IdSource) -> Self {
        Self {
            background_color: coerce::string(
                raw.field("backgroundColor"),
                &defaults.background_color,
            ),
            icon_color: coerce::string(raw.field("iconColor"), &defaults.icon_color),
            border_radius: coerce::enumeration(raw.field("borderRadius"), defaults.border_radius),
        }
    }
}
