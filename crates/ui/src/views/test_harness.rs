use std::sync::Arc;

use belajar_core::model::content::{
    ChoiceQuestion, Exercise, ExerciseKind, Section, Unit, UnitSummary, VocabItem,
};
use belajar_core::model::{ExerciseId, LessonId, UnitId};
use belajar_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, ContentService, ExerciseLoopService, ProgressService};
use storage::JsonContentRepository;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context, use_progress_provider};
use crate::views::{ExerciseView, LessonView, UnitMapView, UnitOverviewView};

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn content(&self) -> Arc<ContentService> {
        self.services.content()
    }

    fn exercises(&self) -> Arc<ExerciseLoopService> {
        self.services.exercises()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    UnitMap,
    UnitOverview(u32),
    Lesson(u32, String),
    Exercise(u32, String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_progress_provider(&ctx);
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::UnitMap => rsx! { UnitMapView {} },
        ViewKind::UnitOverview(unit_id) => rsx! { UnitOverviewView { unit_id } },
        ViewKind::Lesson(unit_id, section_id) => rsx! { LessonView { unit_id, section_id } },
        ViewKind::Exercise(unit_id, exercise_id) => rsx! { ExerciseView { unit_id, exercise_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Services over in-memory storage and a three-unit catalog where only unit 1 has content.
pub async fn test_services() -> AppServices {
    let index = (1..=3)
        .map(|id| UnitSummary {
            id: UnitId::new(id),
            title: format!("Pelajaran {id}"),
            subtitle: format!("Lesson {id}"),
            icon: None,
        })
        .collect();
    let content = JsonContentRepository::from_parts(index, vec![sample_unit()]);
    AppServices::from_parts(Storage::in_memory(), Arc::new(content), fixed_clock()).await
}

fn sample_unit() -> Unit {
    let question = ChoiceQuestion {
        question: "Apa artinya 'selamat pagi'?".to_string(),
        options: vec!["good morning".to_string(), "good night".to_string()],
        answer: 0,
    };
    Unit {
        id: UnitId::new(1),
        title: "Perkenalan".to_string(),
        subtitle: "Introductions".to_string(),
        sections: vec![Section {
            id: LessonId::new("1-1"),
            title: "Salam".to_string(),
            title_en: "Greetings".to_string(),
            content: Default::default(),
            vocabulary: vec![VocabItem {
                word: "pagi".to_string(),
                meaning: "morning".to_string(),
            }],
            audio: None,
        }],
        exercises: vec![
            Exercise {
                id: ExerciseId::new("ex-1-1"),
                instruction: "Choose the meaning".to_string(),
                kind: ExerciseKind::MultipleChoice(vec![question.clone(), question]),
            },
            Exercise {
                id: ExerciseId::new("ex-1-2"),
                instruction: "Listen and repeat".to_string(),
                kind: ExerciseKind::Unknown("listening".to_string()),
            },
        ],
        end_of_unit_vocabulary: (0..22)
            .map(|i| VocabItem {
                word: format!("kata{i}"),
                meaning: format!("word {i}"),
            })
            .collect(),
    }
}

pub fn setup_view_harness(view: ViewKind, services: AppServices) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, services }
}
