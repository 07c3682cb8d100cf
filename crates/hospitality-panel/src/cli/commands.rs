use std::num::NonZeroUsize;
use std::time::Duration;

use hospitality_seeker::{Record, ViewCoordinator};
use serde::Serialize;
use tokio::io::BufReader;
use tracing::debug;

use super::{AllotmentsCommand, Cli, Command, HostelUpdateArgs, HostelsCommand, ListArgs, LogArgs, LoginArgs};
use crate::api::ApiClient;
use crate::browse;
use crate::config::Config;
use crate::error::{PanelError, Result};
use crate::hostel_form::validate;
use crate::models::{Credentials, Hostel};
use crate::render::{Renderer, TableRow};
use crate::screens::{allotments, gate_logs, hostel_logs, hostels, registrants, Screen};
use crate::serve::{self, SpaConfig};
use crate::session::{require_user, SessionStore};
use crate::source::{refresh, watch, RecordSource};
use crate::views::{mutation_view, Action, AnalyticsView, ListView, Message};

/// Everything a command needs, resolved once per invocation.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub renderer: Renderer,
    pub store: SessionStore,
    pub client: ApiClient,
}

impl Context {
    pub fn new(cli: &Cli, config: Config) -> Result<Self> {
        let renderer = Renderer::new(cli.output)?;
        let store = SessionStore::new(config.session_file.clone());
        let client = ApiClient::from_config(&config)?.with_cookie(store.load()?);
        Ok(Context {
            config,
            renderer,
            store,
            client,
        })
    }

    /// Command line wins over config, config over the screen default.
    fn page_size(&self, flag: Option<NonZeroUsize>) -> Option<NonZeroUsize> {
        flag.or(self.config.page_size)
    }

    fn emit(&self, text: &str) {
        println!("{}", text.trim_end());
    }
}

/// Dispatches a parsed command line.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let mut ctx = Context::new(&cli, config)?;
    debug!(command = ?cli.command, api = %ctx.client.base_url(), "dispatch");

    match cli.command {
        Command::Login(args) => login(&mut ctx, args).await,
        Command::Logout => logout(&mut ctx).await,
        Command::Whoami => {
            let user = require_user(&ctx.client).await?;
            ctx.emit(&ctx.renderer.user(&user)?);
            Ok(())
        }
        Command::Registrants(args) => {
            let view = registrants::coordinator(ctx.page_size(args.page_size))?;
            list_screen(&ctx, registrants::TITLE, view, &args).await
        }
        Command::GateLogs(args) => {
            let view = gate_logs::coordinator(ctx.page_size(args.list.page_size))?;
            log_screen(&ctx, gate_logs::TITLE, view, &args).await
        }
        Command::HostelLogs(args) => {
            let view = hostel_logs::coordinator(ctx.page_size(args.list.page_size))?;
            log_screen(&ctx, hostel_logs::TITLE, view, &args).await
        }
        Command::Allotments(AllotmentsCommand::List(args)) => {
            let view = allotments::coordinator(ctx.page_size(args.page_size))?;
            list_screen(&ctx, allotments::TITLE, view, &args).await
        }
        Command::Allotments(AllotmentsCommand::Remove { id, dry_run }) => {
            remove_allotment(&ctx, &id, dry_run).await
        }
        Command::Hostels(HostelsCommand::List(args)) => {
            let view = hostels::coordinator(ctx.page_size(args.page_size))?;
            list_screen(&ctx, hostels::TITLE, view, &args).await
        }
        Command::Hostels(HostelsCommand::Create(args)) => {
            let hostel = args.draft().into_hostel(None);
            save_hostel(&ctx, Action::Create, hostel, args.dry_run).await
        }
        Command::Hostels(HostelsCommand::Update(args)) => update_hostel(&ctx, &args).await,
        Command::Hostels(HostelsCommand::Delete { id, dry_run }) => {
            delete_hostel(&ctx, &id, dry_run).await
        }
        Command::Analytics => analytics(&ctx).await,
        Command::Browse(args) => {
            let page_size = ctx.page_size(args.page_size);
            browse_screen(&ctx, args.screen, page_size).await
        }
        Command::Serve(_) => {
            let config = SpaConfig {
                dist: ctx.config.dist_dir.clone(),
                base: ctx.config.base_path.clone(),
            };
            serve::serve(config, ctx.config.port).await
        }
    }
}

async fn login(ctx: &mut Context, args: LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => {
            let term = console::Term::stderr();
            term.write_str("Password: ")?;
            term.read_secure_line()?
        }
    };
    let credentials = Credentials {
        email: args.email,
        password,
    };

    let cookie = ctx.client.login(&credentials).await?;
    ctx.store.save(&cookie)?;

    match ctx.client.session().await? {
        Some(user) => ctx.emit(&ctx.renderer.user(&user)?),
        None => ctx.emit(&ctx.renderer.messages(&[Message::success("Logged in")])?),
    }
    Ok(())
}

async fn logout(ctx: &mut Context) -> Result<()> {
    if ctx.client.cookie().is_none() {
        ctx.emit(&ctx.renderer.messages(&[Message::info("Not logged in")])?);
        return Ok(());
    }
    match ctx.client.logout().await {
        Ok(()) | Err(PanelError::Unauthenticated) => {}
        Err(err) => return Err(err),
    }
    ctx.store.clear()?;
    ctx.emit(&ctx.renderer.messages(&[Message::success("Logged out successfully")])?);
    Ok(())
}

fn render_list<R>(ctx: &Context, title: &str, view: &ViewCoordinator<R>, facets: bool) -> Result<String>
where
    R: Record + TableRow + Serialize,
{
    let frame = view.frame();
    ctx.renderer.list(&ListView::from_frame(title, &frame, facets))
}

async fn list_screen<R>(ctx: &Context, title: &str, mut view: ViewCoordinator<R>, args: &ListArgs) -> Result<()>
where
    R: Record + TableRow + Serialize + Send,
    ApiClient: RecordSource<R>,
{
    require_user(&ctx.client).await?;
    refresh(&mut view, &ctx.client).await?;
    args.view_args().apply(&mut view)?;
    ctx.emit(&render_list(ctx, title, &view, args.facets)?);
    Ok(())
}

async fn log_screen<R>(ctx: &Context, title: &str, view: ViewCoordinator<R>, args: &LogArgs) -> Result<()>
where
    R: Record + TableRow + Serialize + Send,
    ApiClient: RecordSource<R>,
{
    match args.watch_interval() {
        Some(every) => watch_screen(ctx, title, view, &args.list, every).await,
        None => list_screen(ctx, title, view, &args.list).await,
    }
}

/// Re-fetches on a timer until Ctrl-C. Each fetch replaces the whole
/// collection; search, filters and a still-valid page survive.
async fn watch_screen<R>(
    ctx: &Context,
    title: &str,
    mut view: ViewCoordinator<R>,
    args: &ListArgs,
    every: Duration,
) -> Result<()>
where
    R: Record + TableRow + Serialize + Send,
    ApiClient: RecordSource<R>,
{
    require_user(&ctx.client).await?;
    let term = console::Term::stdout();
    let mut first = true;

    watch(&mut view, &ctx.client, every, tokio::signal::ctrl_c(), |view| {
        if first {
            args.view_args().apply(view)?;
            first = false;
        }
        if ctx.renderer.mode().is_styled() {
            if let Err(err) = term.clear_screen() {
                debug!(error = %err, "could not clear screen");
            }
        }
        ctx.emit(&render_list(ctx, title, view, args.facets)?);
        Ok(())
    })
    .await
}

async fn remove_allotment(ctx: &Context, id: &str, dry_run: bool) -> Result<()> {
    require_user(&ctx.client).await?;
    let item = serde_json::json!({ "id": id });
    let view = if dry_run {
        mutation_view(Action::Remove, item).dry_run().build()
    } else {
        ctx.client.remove_unclaimed_bed(id).await?;
        mutation_view(Action::Remove, item)
            .success(format!("Bed {id} released"))
            .build()
    };
    ctx.emit(&ctx.renderer.mutation("Unclaimed bed", &view)?);
    Ok(())
}

/// Validates, then sends unless `dry_run`. Validation failures are shown and
/// returned as [`PanelError::Validation`].
async fn save_hostel(ctx: &Context, action: Action, hostel: Hostel, dry_run: bool) -> Result<()> {
    require_user(&ctx.client).await?;

    if let Err(errors) = validate(&hostel) {
        let view = mutation_view(action, &hostel)
            .validation_errors(errors.clone())
            .build();
        ctx.emit(&ctx.renderer.mutation("Hostel", &view)?);
        return Err(PanelError::Validation(errors));
    }

    let mut builder = mutation_view(action, &hostel);
    if dry_run {
        builder = builder.dry_run();
    } else {
        match action {
            Action::Update => ctx.client.update_hostel(&hostel).await?,
            _ => ctx.client.create_hostel(&hostel).await?,
        }
        builder = builder.success(format!("{} {}", hostel.hostel_name, action.past_tense()));
    }
    ctx.emit(&ctx.renderer.mutation("Hostel", &builder.build())?);
    Ok(())
}

async fn update_hostel(ctx: &Context, args: &HostelUpdateArgs) -> Result<()> {
    require_user(&ctx.client).await?;
    let mut view = hostels::coordinator(None)?;
    refresh(&mut view, &ctx.client).await?;
    let current = view
        .find(&args.id)
        .cloned()
        .ok_or_else(|| PanelError::NotFound {
            kind: "hostel",
            id: args.id.clone(),
        })?;
    save_hostel(ctx, Action::Update, args.patch().apply(current), args.dry_run).await
}

async fn delete_hostel(ctx: &Context, id: &str, dry_run: bool) -> Result<()> {
    require_user(&ctx.client).await?;
    let item = serde_json::json!({ "hostel_id": id });
    let view = if dry_run {
        mutation_view(Action::Delete, item).dry_run().build()
    } else {
        ctx.client.delete_hostel(id).await?;
        mutation_view(Action::Delete, item)
            .success(format!("Hostel {id} deleted"))
            .build()
    };
    ctx.emit(&ctx.renderer.mutation("Hostel", &view)?);
    Ok(())
}

async fn analytics(ctx: &Context) -> Result<()> {
    require_user(&ctx.client).await?;
    let (inside, beds) = tokio::try_join!(ctx.client.inside_campus(), ctx.client.live_beds())?;
    ctx.emit(&ctx.renderer.analytics(&AnalyticsView::new(inside, beds))?);
    Ok(())
}

async fn browse_screen(ctx: &Context, screen: Screen, page_size: Option<NonZeroUsize>) -> Result<()> {
    require_user(&ctx.client).await?;
    let title = screen.title();
    if screen.is_live() {
        ctx.emit(&ctx.renderer.messages(&[Message::info("Live screen: `refresh` fetches new scans")])?);
    }
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    match screen {
        Screen::Registrants => {
            let mut view = registrants::coordinator(page_size)?;
            browse::run(&mut view, &ctx.client, &ctx.renderer, title, input, &mut out).await
        }
        Screen::GateLogs => {
            let mut view = gate_logs::coordinator(page_size)?;
            browse::run(&mut view, &ctx.client, &ctx.renderer, title, input, &mut out).await
        }
        Screen::HostelLogs => {
            let mut view = hostel_logs::coordinator(page_size)?;
            browse::run(&mut view, &ctx.client, &ctx.renderer, title, input, &mut out).await
        }
        Screen::Allotments => {
            let mut view = allotments::coordinator(page_size)?;
            browse::run(&mut view, &ctx.client, &ctx.renderer, title, input, &mut out).await
        }
        Screen::Hostels => {
            let mut view = hostels::coordinator(page_size)?;
            browse::run(&mut view, &ctx.client, &ctx.renderer, title, input, &mut out).await
        }
    }
}
