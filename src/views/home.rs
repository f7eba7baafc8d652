use maud::{Markup, html};

use crate::utils::listing::{ActivityKind, RecentActivity};
use crate::views::page;

pub fn home(recent: &[RecentActivity], flash: Option<&str>) -> Markup {
    page(
        "Home",
        flash,
        html! {
            h1 { "Fyyur" }
            h2 { "Recently joined" }
            @if recent.is_empty() {
                p { "Nobody has joined yet." }
            }
            ul.recent {
                @for entry in recent {
                    li {
                        @match entry.kind {
                            ActivityKind::Artist => "Artist: ",
                            ActivityKind::Venue => "Venue: ",
                        }
                        a href=(entry.link()) { (entry.name) }
                        " joined " (entry.joined.format("%Y-%m-%d %H:%M").to_string())
                    }
                }
            }
        },
    )
}
