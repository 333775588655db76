use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use posreview_application::{error::AppError, prelude as flows};
use posreview_core::{approval::ApprovalStatus, entities::*, usecases::NewReview};
use posreview_db_sqlite::{self as sqlite, Connections};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Approval workflow for reviews of points of sale")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL of the SQLite database, overrides the configuration
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a point of sale
    AddPos {
        #[arg(long)]
        name: String,
    },
    /// Register a user
    AddUser {
        #[arg(long)]
        login_name: String,
    },
    /// Submit a new review
    Submit {
        #[arg(long)]
        pos: Option<PosId>,
        #[arg(long)]
        author: Option<UserId>,
        #[arg(long)]
        text: String,
    },
    /// Replace the text of an existing review
    Edit {
        #[arg(long)]
        review: ReviewId,
        #[arg(long)]
        pos: Option<PosId>,
        #[arg(long)]
        author: Option<UserId>,
        #[arg(long)]
        text: String,
    },
    /// Approve a review on behalf of a user
    Approve {
        #[arg(long)]
        review: ReviewId,
        #[arg(long)]
        user: UserId,
    },
    /// List the approved or pending reviews of a point of sale
    List {
        #[arg(long)]
        pos: PosId,
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        approved: bool,
    },
    /// Show a single review
    Show {
        #[arg(long)]
        review: ReviewId,
    },
}

fn print_review(review: &Review) {
    let id = review
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let updated_at = review
        .updated_at
        .map(|at| at.to_string())
        .unwrap_or_default();
    println!(
        "#{id} pos={} author={} approvals={} status={} updated={updated_at}\n    {}",
        review.pos_id,
        review.author_id,
        review.approval_count,
        ApprovalStatus::from(review),
        review.text,
    );
}

fn connect(cfg: &Config) -> Result<Connections> {
    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    Ok(connections)
}

pub fn run() -> Result<()> {
    let Args {
        config,
        db_url,
        command,
    } = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let quorum = cfg.reviews.approval_quorum;
    log::debug!("Approval quorum: {quorum}");

    let connections = connect(&cfg)?;
    let res: Result<(), AppError> = match command {
        Command::AddPos { name } => flows::create_pos(&connections, &name).map(|pos| {
            println!("{} {}", pos.id, pos.name);
        }),
        Command::AddUser { login_name } => {
            flows::create_user(&connections, &login_name).map(|user| {
                println!("{} {}", user.id, user.login_name);
            })
        }
        Command::Submit { pos, author, text } => flows::submit_review(
            &connections,
            NewReview {
                id: None,
                pos_id: pos,
                author_id: author,
                text,
            },
        )
        .map(|review| print_review(&review)),
        Command::Edit {
            review,
            pos,
            author,
            text,
        } => flows::submit_review(
            &connections,
            NewReview {
                id: Some(review),
                pos_id: pos,
                author_id: author,
                text,
            },
        )
        .map(|review| print_review(&review)),
        Command::Approve { review, user } => {
            flows::approve_review(&connections, quorum, review, user)
                .map(|review| print_review(&review))
        }
        Command::List { pos, approved } => {
            flows::filter_reviews(&connections, pos, approved).map(|reviews| {
                for review in &reviews {
                    print_review(review);
                }
            })
        }
        Command::Show { review } => {
            flows::get_review(&connections, review).map(|review| print_review(&review))
        }
    };
    if let Err(err) = &res {
        match err.kind() {
            Some(kind) => log::warn!("Request rejected ({kind:?}): {err}"),
            None => log::error!("Request failed: {err}"),
        }
    }
    Ok(res?)
}
