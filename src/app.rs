use crate::api::{ApiClient, ApiError, ApiResponse};
use crate::auth::{PendingSubmit, SubmitOutcome};
use crate::components::{Footer, NavBar};
use crate::config::Config;
use crate::keymap::Action;
use crate::router::{Route, Router};
use crate::screens::{
    HomeScreen, LoginScreen, NotFoundScreen, RegisterScreen, RenderContext, Screen, ScreenAction,
    ScreenContext,
};
use crate::session::SessionStore;
use crate::tui::Tui;
use crate::utils::create_shell_layout;
use crate::widgets::ToastManager;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, error, info};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

type SubmitResult = Result<ApiResponse, ApiError>;

/// Which form a request in flight belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    Login,
    Register,
}

struct InFlight {
    form: FormKind,
    rx: oneshot::Receiver<SubmitResult>,
}

/// One screen per route
#[derive(Debug, Default)]
struct Screens {
    home: HomeScreen,
    login: LoginScreen,
    register: RegisterScreen,
    not_found: NotFoundScreen,
}

impl Screens {
    fn get_mut(&mut self, route: &Route) -> &mut dyn Screen {
        match route {
            Route::Home => &mut self.home,
            Route::Register => &mut self.register,
            Route::Login => &mut self.login,
            Route::NotFound(_) => &mut self.not_found,
        }
    }
}

/// Main application state
pub struct App {
    config: Config,
    session: SessionStore,
    api: ApiClient,
    router: Router,
    screens: Screens,
    toasts: ToastManager,
    in_flight: Option<InFlight>,
    runtime: Runtime,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, session: SessionStore, start: Route) -> Result<Self> {
        let api = ApiClient::new(&config.api).context("Failed to create API client")?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;

        let mut app = Self {
            config,
            session,
            api,
            router: Router::new(start),
            screens: Screens::default(),
            toasts: ToastManager::new(),
            in_flight: None,
            runtime,
            should_quit: false,
        };

        let start = app.router.current().clone();
        if let Route::NotFound(path) = &start {
            app.screens.not_found.set_path(path.clone());
        }
        let ctx = ScreenContext::new(&app.config, &app.session);
        app.screens.get_mut(&start).on_enter(&ctx)?;

        info!("App started at {}", start);
        Ok(app)
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let result = self.event_loop(&mut tui);

        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            self.poll_in_flight();
            self.toasts.tick();

            let mut render_result = Ok(());
            tui.terminal_mut().draw(|frame| render_result = self.render(frame))?;
            render_result?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(EVENT_POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a submission is waiting for its response
    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Draw the shell and the active screen
    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config, &self.session);
        let route = self.router.current();
        let screen = self.screens.get_mut(route);
        let footer_text = screen.footer_text(&ctx);

        let (nav_area, body_area, footer_area) = create_shell_layout(area);
        if let Route::NotFound(_) = route {
            // The 404 page stands outside the nav shell
            let body = Rect::new(
                area.x,
                area.y,
                area.width,
                area.height.saturating_sub(footer_area.height),
            );
            screen.render(frame, body, &ctx)?;
        } else {
            NavBar::render(
                frame,
                nav_area,
                &self.config.brand,
                route,
                self.session.is_authenticated(),
            )?;
            screen.render(frame, body_area, &ctx)?;
        }
        Footer::render(frame, footer_area, &footer_text)?;

        self.toasts.render(frame, area);
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            let input_focused = self.screens.get_mut(self.router.current()).is_input_focused();
            match self.config.keymap.get_action(key.code, key.modifiers) {
                Some(Action::ForceQuit) => return self.apply(ScreenAction::Quit),
                Some(Action::Quit) if !input_focused => return self.apply(ScreenAction::Quit),
                Some(Action::GoHome) => return self.apply(ScreenAction::Navigate(Route::Home)),
                Some(Action::GoRegister) => {
                    return self.apply(ScreenAction::Navigate(Route::Register))
                }
                Some(Action::GoLogin) => return self.apply(ScreenAction::Navigate(Route::Login)),
                Some(Action::Logout) => return self.apply(ScreenAction::Logout),
                _ => {}
            }
        }

        let ctx = ScreenContext::new(&self.config, &self.session);
        let action = self
            .screens
            .get_mut(self.router.current())
            .handle_event(event, &ctx)?;
        self.apply(action)
    }

    fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(route) => self.navigate(route)?,
            ScreenAction::Submit(pending) => self.dispatch(pending),
            ScreenAction::Logout => self.logout()?,
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    fn navigate(&mut self, route: Route) -> Result<()> {
        if self.router.current() == &route {
            return Ok(());
        }

        // A response arriving after the user left is ignored
        if self.in_flight.take().is_some() {
            debug!("Dropping in-flight request on navigation");
        }

        let ctx = ScreenContext::new(&self.config, &self.session);
        self.screens.get_mut(self.router.current()).on_exit(&ctx)?;

        if let Route::NotFound(path) = &route {
            self.screens.not_found.set_path(path.clone());
        }
        let route = self.router.navigate_to(route).clone();
        self.screens.get_mut(&route).on_enter(&ctx)?;
        Ok(())
    }

    /// Send the request on the runtime; the loop picks the result up later
    fn dispatch(&mut self, pending: PendingSubmit) {
        let form = match self.router.current() {
            Route::Login => FormKind::Login,
            Route::Register => FormKind::Register,
            other => {
                error!("Submit from {} has no form to report back to", other);
                return;
            }
        };

        let (tx, rx) = oneshot::channel();
        let api = self.api.clone();
        self.runtime.spawn(async move {
            let result = pending.send(&api).await;
            // The receiver is gone if the user navigated away
            let _ = tx.send(result);
        });
        self.in_flight = Some(InFlight { form, rx });
    }

    fn poll_in_flight(&mut self) {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return;
        };

        let result = match in_flight.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(ApiError::Transport(
                "request task ended without a response".to_string(),
            )),
        };

        if let Some(in_flight) = self.in_flight.take() {
            self.complete(in_flight.form, result);
        }
    }

    fn complete(&mut self, form: FormKind, result: SubmitResult) {
        let outcome = match form {
            FormKind::Login => self.screens.login.finish(result, &mut self.session),
            FormKind::Register => self.screens.register.finish(result, &mut self.session),
        };

        if let SubmitOutcome::Succeeded {
            route,
            confirmation,
        } = outcome
        {
            self.toasts.success(confirmation);
            if let Err(e) = self.navigate(route) {
                error!("Navigation after success failed: {:#}", e);
            }
        }
    }

    fn logout(&mut self) -> Result<()> {
        match self.session.clear_all() {
            Ok(()) => {
                self.toasts.info("Logged out");
                self.navigate(Route::Home)
            }
            Err(e) => {
                error!("Failed to clear session: {:#}", e);
                self.toasts.error("Could not clear the session");
                Ok(())
            }
        }
    }
}
