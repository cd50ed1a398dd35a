//! Accessor generation for the per-node link fields.

/// Generate `name()`, `set_name()` and `has_name()` for each link field of a
/// node. A link holds [`NONE`](crate::types::NONE) when absent.
macro_rules! link_accessors {
    ($($link:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Slot index of the `" $link "` link, or `NONE`."]
                #[inline]
                pub fn $link(&self) -> NodeId {
                    self.$link
                }

                #[inline]
                pub(crate) fn [<set_ $link>](&mut self, id: NodeId) {
                    self.$link = id;
                }

                #[doc = "Returns true if the `" $link "` link is present."]
                #[inline]
                pub fn [<has_ $link>](&self) -> bool {
                    self.$link != NONE
                }
            )*
        }
    };
}

pub(crate) use link_accessors;
