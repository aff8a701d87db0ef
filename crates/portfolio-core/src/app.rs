//! Application bootstrap and event dispatch.
//!
//! [`PortfolioApp`] owns the document, the state record, the event loop and
//! every controller. The host feeds it [`UiEvent`]s and advances its clock;
//! everything else (timers, reveals, effects) happens inside.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use crate::config::{ConfigPatch, PortfolioConfig};
use crate::controllers::{
    print, Context, ExperienceManager, FormManager, KeyboardShortcuts, Module, NavigationManager,
    ProjectsManager, ScrollReveal, Shortcut, SkillsManager, ThemeManager,
};
use crate::effects::{CyberpunkEffects, ParticleSystem};
use crate::error::PortfolioResult;
use crate::events::{EventBus, PortfolioEvent};
use crate::form::{SimulatedTransport, SubmissionTransport};
use crate::ports::{Document, Node};
use crate::scheduler::EventLoop;
use crate::state::{AppState, StateSnapshot};
use crate::storage::{MemoryPreferences, PreferenceStore};
use crate::types::{FieldName, KeyTarget, ReadyState, SectionId};

/// Input from the hosting page.
///
/// `Scrolled` and `Resized` carry no data: the host updates the document's
/// viewport before sending them. `DocumentClicked` is sent for every click
/// in addition to any more specific event.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    DomContentLoaded,
    NavToggleClicked,
    NavLinkClicked(SectionId),
    DocumentClicked { target: Node },
    ThemeToggleChanged { checked: bool },
    Scrolled,
    Resized,
    MouseMoved { x: f64, y: f64 },
    KeyDown { key: String, target: KeyTarget },
    FieldBlurred(FieldName),
    FieldInput { field: FieldName, value: String },
    FormSubmitted,
    /// `on_links` is set when the click landed in the card's link row
    ProjectCardClicked { id: String, on_links: bool },
    ModalCloseClicked,
    ModalOverlayClicked,
    /// Raw `data-filter` value of the clicked button
    FilterClicked(String),
    BeforePrint,
    AfterPrint,
}

/// Unit of work on the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Ui(UiEvent),
    SubmissionSettled,
    HideSuccess,
    WidenSkillBar { bar: Node, level: u8 },
    FadeInTimelineItem(Node),
    RevealChild(Node),
    MatrixTick,
    ExpireMatrixColumn(u64),
    GlitchTick(usize),
    ResetGlitch(usize),
    SpawnParticle,
    AnimationFrame,
    ResizeCanvas,
}

struct Modules {
    theme: ThemeManager,
    navigation: NavigationManager,
    form: FormManager,
    skills: SkillsManager,
    projects: ProjectsManager,
    experience: ExperienceManager,
    effects: CyberpunkEffects,
    reveal: ScrollReveal,
    particles: ParticleSystem,
    keyboard: KeyboardShortcuts,
}

impl Modules {
    /// Bootstrap order
    fn in_order(&mut self) -> [&mut dyn Module; 10] {
        [
            &mut self.theme,
            &mut self.navigation,
            &mut self.form,
            &mut self.skills,
            &mut self.projects,
            &mut self.experience,
            &mut self.effects,
            &mut self.reveal,
            &mut self.particles,
            &mut self.keyboard,
        ]
    }

    fn run(&mut self, cx: &mut Context<'_>, task: Task) {
        match task {
            Task::Ui(event) => self.on_ui(cx, event),
            Task::SubmissionSettled => self.form.settle(cx),
            Task::HideSuccess => self.form.hide_success(cx),
            Task::WidenSkillBar { bar, level } => self.skills.widen(cx, bar, level),
            Task::FadeInTimelineItem(item) => self.experience.fade_in(cx, item),
            Task::RevealChild(child) => self.reveal.reveal_child(cx, child),
            Task::MatrixTick => self.effects.matrix.tick(cx),
            Task::ExpireMatrixColumn(id) => self.effects.matrix.expire(cx, id),
            Task::GlitchTick(index) => self.effects.glitch.tick(cx, index),
            Task::ResetGlitch(index) => self.effects.glitch.reset(cx, index),
            Task::SpawnParticle => self.particles.spawn_random(cx),
            Task::AnimationFrame => self.particles.frame(cx),
            Task::ResizeCanvas => self.particles.resize_canvas(cx),
        }
    }

    fn on_ui(&mut self, cx: &mut Context<'_>, event: UiEvent) {
        match event {
            UiEvent::DomContentLoaded => {}
            UiEvent::NavToggleClicked => self.navigation.toggle_menu(cx),
            UiEvent::NavLinkClicked(section) => self.navigation.on_link_clicked(cx, section),
            UiEvent::DocumentClicked { target } => self.navigation.on_document_clicked(cx, target),
            UiEvent::ThemeToggleChanged { checked } => self.theme.on_toggle_changed(cx, checked),
            UiEvent::Scrolled => {
                self.navigation.on_scroll(cx);
                self.skills.on_viewport_change(cx);
                self.reveal.on_viewport_change(cx);
                self.reveal.on_scroll(cx);
            }
            UiEvent::Resized => {
                self.particles.on_resize(cx);
                self.skills.on_viewport_change(cx);
                self.reveal.on_viewport_change(cx);
            }
            UiEvent::MouseMoved { x, y } => {
                self.effects.on_mouse_move(cx, x, y);
                self.particles.on_mouse_move(cx, x, y);
            }
            UiEvent::KeyDown { key, target } => {
                if key == "Escape" {
                    self.navigation.on_escape(cx);
                    self.projects.on_escape(cx);
                }
                match self.keyboard.resolve(&key, target) {
                    Some(Shortcut::ScrollTo(section)) => {
                        self.navigation.scroll_to_section(cx, section)
                    }
                    Some(Shortcut::ToggleTheme) => self.theme.toggle(cx),
                    None => {}
                }
            }
            UiEvent::FieldBlurred(field) => {
                self.form.validate_field(cx, field);
            }
            UiEvent::FieldInput { field, value } => self.form.on_input(cx, field, &value),
            UiEvent::FormSubmitted => self.form.submit(cx),
            UiEvent::ProjectCardClicked { id, on_links } => {
                self.projects.on_card_clicked(cx, &id, on_links)
            }
            UiEvent::ModalCloseClicked | UiEvent::ModalOverlayClicked => self.projects.close(cx),
            UiEvent::FilterClicked(raw) => self.experience.on_filter_clicked(cx, &raw),
            UiEvent::BeforePrint => print::set_printing(cx, true),
            UiEvent::AfterPrint => print::set_printing(cx, false),
        }
    }
}

/// The portfolio page's behavior, driven by a host.
pub struct PortfolioApp<D: Document> {
    doc: D,
    state: AppState,
    config: PortfolioConfig,
    timers: EventLoop<Task>,
    events: EventBus,
    rng: StdRng,
    modules: Modules,
    started: bool,
}

impl<D: Document> PortfolioApp<D> {
    /// An app with in-memory preferences and the simulated transport.
    pub fn new(doc: D) -> Self {
        Self::builder(doc).build()
    }

    pub fn builder(doc: D) -> PortfolioAppBuilder<D> {
        PortfolioAppBuilder {
            doc,
            config: PortfolioConfig::default(),
            prefs: None,
            transport: None,
            seed: None,
        }
    }

    /// Start now, or once `DomContentLoaded` arrives if the document is
    /// still loading.
    pub fn init(&mut self) -> PortfolioResult<()> {
        if self.doc.ready_state() == ReadyState::Loading {
            debug!("Document still loading, deferring start");
            return Ok(());
        }
        self.start()
    }

    /// Initialize every module in order. Runs at most once.
    pub fn start(&mut self) -> PortfolioResult<()> {
        if self.started {
            return Ok(());
        }
        info!("Portfolio app starting");

        let result = self.with_cx(|modules, cx| -> PortfolioResult<()> {
            for module in modules.in_order() {
                debug!(module = module.name(), "Initializing module");
                module.init(cx)?;
            }
            Ok(())
        });
        if let Err(e) = result {
            error!(error = %e, "Portfolio app initialization error");
            return Err(e);
        }

        self.doc.add_class(Node::Body, "loaded");
        self.state.initialized = true;
        self.started = true;
        self.events.emit(PortfolioEvent::Ready);
        self.pump_events();
        self.drain(self.timers.now());

        info!("Portfolio app initialized");
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Dispatch one host event and run everything it makes ready.
    pub fn handle(&mut self, event: UiEvent) {
        if event == UiEvent::DomContentLoaded {
            if !self.started {
                // Failure is already logged
                let _ = self.start();
            }
            return;
        }
        if !self.started {
            debug!(?event, "Ignoring event before start");
            return;
        }
        self.timers.post(Task::Ui(event));
        self.drain(self.timers.now());
    }

    /// Move the clock forward by `dt`, running every timer that comes due.
    pub fn advance(&mut self, dt: Duration) {
        let deadline = self.timers.now() + dt;
        self.drain(deadline);
    }

    /// Time since the app was created, on its own clock
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Time until the next timer fires, if any
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn update_config(&mut self, patch: ConfigPatch) {
        self.config.apply(patch);
        info!(config = ?self.config, "Configuration updated");
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PortfolioEvent> {
        self.events.subscribe()
    }

    fn with_cx<R>(&mut self, f: impl FnOnce(&mut Modules, &mut Context<'_>) -> R) -> R {
        let mut cx = Context {
            state: &mut self.state,
            doc: &mut self.doc,
            timers: &mut self.timers,
            events: &mut self.events,
            config: &self.config,
            rng: &mut self.rng,
        };
        f(&mut self.modules, &mut cx)
    }

    fn drain(&mut self, deadline: Duration) {
        while let Some(task) = self.timers.next_due(deadline) {
            self.with_cx(|modules, cx| modules.run(cx, task));
            self.pump_events();
        }
        self.timers.settle(deadline);
    }

    /// Deliver internal notifications to the modules that react to them.
    fn pump_events(&mut self) {
        for event in self.events.drain_local() {
            if let PortfolioEvent::ThemeChanged(theme) = event {
                self.modules.effects.on_theme_changed(&mut self.doc, theme);
            }
        }
    }
}

pub struct PortfolioAppBuilder<D: Document> {
    doc: D,
    config: PortfolioConfig,
    prefs: Option<Box<dyn PreferenceStore>>,
    transport: Option<Box<dyn SubmissionTransport>>,
    seed: Option<u64>,
}

impl<D: Document> PortfolioAppBuilder<D> {
    pub fn config(mut self, config: PortfolioConfig) -> Self {
        self.config = config;
        self
    }

    pub fn preferences(mut self, prefs: impl PreferenceStore + 'static) -> Self {
        self.prefs = Some(Box::new(prefs));
        self
    }

    pub fn transport(mut self, transport: impl SubmissionTransport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Fix the RNG seed so effects replay identically.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> PortfolioApp<D> {
        let config = self.config;
        let transport = self
            .transport
            .unwrap_or_else(|| Box::new(SimulatedTransport::configured()));
        let prefs = self
            .prefs
            .unwrap_or_else(|| Box::new(MemoryPreferences::new()));
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let modules = Modules {
            theme: ThemeManager::new(prefs),
            navigation: NavigationManager::new(),
            form: FormManager::new(transport),
            skills: SkillsManager::new(),
            projects: ProjectsManager::new(),
            experience: ExperienceManager::new(),
            effects: CyberpunkEffects::new(),
            reveal: ScrollReveal::new(),
            particles: ParticleSystem::new(),
            keyboard: KeyboardShortcuts::new(),
        };

        PortfolioApp {
            doc: self.doc,
            state: AppState::default(),
            config,
            timers: EventLoop::new(),
            events: EventBus::new(),
            rng,
            modules,
            started: false,
        }
    }
}
