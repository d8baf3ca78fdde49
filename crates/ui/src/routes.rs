use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::use_progress;
use crate::views::{ExerciseView, LessonView, NotFoundView, UnitMapView, UnitOverviewView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", UnitMapView)] Home {},
        #[route("/unit/:unit_id", UnitOverviewView)] Unit { unit_id: u32 },
        #[route("/unit/:unit_id/lesson/:section_id", LessonView)] Lesson { unit_id: u32, section_id: String },
        #[route("/unit/:unit_id/exercise/:exercise_id", ExerciseView)] Exercise { unit_id: u32, exercise_id: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let progress = use_progress().get();

    rsx! {
        div { class: "layout",
            header { class: "header",
                div { class: "header-inner container",
                    Link { class: "logo", to: Route::Home {},
                        span { class: "logo-icon", "🌴" }
                        span { class: "logo-text", "Belajar!" }
                    }
                    div { class: "header-stats",
                        div { class: "stat", title: "XP Points",
                            span { class: "stat-icon", "⚡" }
                            span { class: "stat-value", "{progress.xp()}" }
                        }
                        div { class: "stat", title: "Day Streak",
                            span { class: "stat-icon", "🔥" }
                            span { class: "stat-value", "{progress.streak()}" }
                        }
                    }
                }
            }
            main { class: "main",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                div { class: "container",
                    p { "Based on " em { "Indonesian for Beginners" } }
                }
            }
        }
    }
}
