//! classdash — terminal dashboard client for the school management API.
//!
//! Holds the admin caches (students, teachers, classrooms), derives the
//! per-classroom and per-teacher counts from them, and renders filtered
//! views; mutations go to the REST backend and the caches are reconciled
//! afterwards.

mod auth;
mod client;
mod config;
mod errors;
mod filter;
mod index;
mod models;
mod store;
mod sync;
mod view;

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::TokenStore;
use client::ApiClient;
use config::Config;
use errors::ApiError;
use filter::{ClassroomFilter, StudentFilter, TeacherFilter};
use index::DashboardIndex;
use models::{ApproveTeacherRequest, Identity, NewClassroom, NewStudent, NewTeacher};
use store::DashboardStore;
use view::RenderStyle;

const USAGE: &str = "\
Usage: classdash <command> [args]

  login <email> <password>         obtain and store a session token
  register <email> <password>      create an account
  logout                           drop the stored session token
  overview                         full dashboard (admin) or own classrooms (teacher)
  students  [all|enrolled|not_enrolled]
  teachers  [all|assigned|unassigned]
  classrooms [all|full|almost|available]
  find-student <id>
  find-teacher <id>
  find-classroom <id>
  add-student <name> <age> <true|false> <classroom_id>
  update-student <id> <name> <age> <true|false> <classroom_id>
  delete-student <id>
  add-teacher <name> <email>
  update-teacher <id> <name> <email>
  delete-teacher <id>
  approve-teacher <user_id> [name] [email]
  my-add-student <classroom_id> <name> <age> <true|false>
  my-delete-student <id>
  add-classroom <name> <grade> <capacity> [teacher_id]
  update-classroom <id> <name> <grade> <capacity> [teacher_id]
  delete-classroom <id>

  --table on any view command switches from list to table layout";

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let style = if let Some(pos) = args.iter().position(|a| a == "--table") {
        args.remove(pos);
        RenderStyle::Table
    } else {
        RenderStyle::List
    };

    match run(&config, &args, style).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}\n\n{USAGE}");
            ExitCode::FAILURE
        }
        Err(CommandError::Api(err)) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(CommandError::SessionExpired) => {
            eprintln!("Session expired. Log in again with: classdash login <email> <password>");
            ExitCode::FAILURE
        }
        Err(CommandError::Io(err)) => {
            eprintln!("token store error: {err}");
            ExitCode::FAILURE
        }
    }
}

enum CommandError {
    Usage(String),
    Api(ApiError),
    SessionExpired,
    Io(std::io::Error),
}

impl From<ApiError> for CommandError {
    fn from(err: ApiError) -> Self {
        CommandError::Api(err)
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

fn usage(msg: impl Into<String>) -> CommandError {
    CommandError::Usage(msg.into())
}

/// Identity check gating the dashboard views. A rejected token is cleared so
/// the next run goes back through login instead of retrying in place.
async fn check_identity(client: &ApiClient, tokens: &TokenStore) -> Result<Identity, CommandError> {
    if client.token().is_none() {
        return Err(CommandError::SessionExpired);
    }
    match client.me().await {
        Ok(identity) => Ok(identity),
        Err(err) if err.is_unauthorized() => {
            tokens.clear()?;
            Err(CommandError::SessionExpired)
        }
        Err(err) => Err(err.into()),
    }
}

async fn run(config: &Config, args: &[String], style: RenderStyle) -> Result<(), CommandError> {
    let tokens = TokenStore::new(config.token_path.clone());
    let mut client = ApiClient::new(config.api_url.clone(), tokens.load());
    let mut store = DashboardStore::new();

    let command = args.first().map(String::as_str).unwrap_or("overview");
    let rest = &args[1.min(args.len())..];

    match command {
        "login" => {
            let [email, password] = two(rest, "login <email> <password>")?;
            let token = client.login(&email, &password).await?;
            tokens.save(&token.access_token)?;
            println!("Logged in as {email}");
        }
        "register" => {
            let [email, password] = two(rest, "register <email> <password>")?;
            let user = client.register(&email, &password).await?;
            println!("Registered {} (id {})", user.email, user.id);
            if user.is_admin {
                println!("This account is the admin account.");
            }
        }
        "logout" => {
            tokens.clear()?;
            println!("Logged out");
        }
        "overview" => {
            let identity = check_identity(&client, &tokens).await?;
            if identity.is_admin {
                sync::refresh_all(&client, &mut store).await?;
                let idx = DashboardIndex::build(&store);
                println!("== Students ==");
                print!(
                    "{}",
                    view::render_students(
                        &filter::filter_students(&store.students, StudentFilter::All),
                        style
                    )
                );
                println!("\n== Teachers ==");
                print!(
                    "{}",
                    view::render_teachers(
                        &filter::filter_teachers(&store.teachers, &idx, TeacherFilter::All),
                        &idx,
                        style
                    )
                );
                println!("\n== Classrooms ==");
                print!(
                    "{}",
                    view::render_classrooms(
                        &filter::filter_classrooms(&store.classrooms, &idx, ClassroomFilter::All),
                        &idx,
                        style
                    )
                );
            } else {
                portal_overview(&client).await?;
            }
        }
        "students" => {
            check_identity(&client, &tokens).await?;
            let selector = rest.first().map(String::as_str).unwrap_or("all");
            sync::refresh_students(&client, &mut store).await?;
            let view_rows =
                filter::filter_students(&store.students, StudentFilter::from_selector(selector));
            print!("{}", view::render_students(&view_rows, style));
        }
        "teachers" => {
            check_identity(&client, &tokens).await?;
            let selector = rest.first().map(String::as_str).unwrap_or("all");
            sync::refresh_teachers(&client, &mut store).await?;
            sync::refresh_classrooms(&client, &mut store).await?;
            let idx = DashboardIndex::build(&store);
            let view_rows = filter::filter_teachers(
                &store.teachers,
                &idx,
                TeacherFilter::from_selector(selector),
            );
            print!("{}", view::render_teachers(&view_rows, &idx, style));
        }
        "classrooms" => {
            check_identity(&client, &tokens).await?;
            let selector = rest.first().map(String::as_str).unwrap_or("all");
            sync::refresh_students(&client, &mut store).await?;
            sync::refresh_classrooms(&client, &mut store).await?;
            let idx = DashboardIndex::build(&store);
            let view_rows = filter::filter_classrooms(
                &store.classrooms,
                &idx,
                ClassroomFilter::from_selector(selector),
            );
            print!("{}", view::render_classrooms(&view_rows, &idx, style));
        }
        "find-student" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "find-student <id>")?;
            sync::refresh_students(&client, &mut store).await?;
            match store.students.get(id) {
                Some(s) => println!(
                    "Found: #{} {}, age {}, classroom_id={}, enrolled={}",
                    s.id, s.name, s.age, s.classroom_id, s.is_enrolled
                ),
                None => println!("No student found with ID {id}."),
            }
        }
        "find-teacher" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "find-teacher <id>")?;
            sync::refresh_teachers(&client, &mut store).await?;
            match store.teachers.get(id) {
                Some(t) => println!("Found: #{} {} ({})", t.id, t.name, t.email),
                None => println!("No teacher found with ID {id}."),
            }
        }
        "find-classroom" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "find-classroom <id>")?;
            sync::refresh_classrooms(&client, &mut store).await?;
            match store.classrooms.get(id) {
                Some(c) => println!(
                    "Found: #{} {}, grade={}, capacity={}, teacher_id={}",
                    c.id,
                    c.name,
                    c.grade,
                    c.capacity,
                    c.teacher_id.map_or("none".to_string(), |t| t.to_string())
                ),
                None => println!("No classroom found with ID {id}."),
            }
        }
        "add-student" => {
            check_identity(&client, &tokens).await?;
            let student = parse_student(rest, "add-student <name> <age> <true|false> <classroom_id>")?;
            let created = sync::create_student(&client, &mut store, &student).await?;
            println!("Added student #{}", created.id);
        }
        "update-student" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "update-student <id> ...")?;
            let student = parse_student(
                &rest[1..],
                "update-student <id> <name> <age> <true|false> <classroom_id>",
            )?;
            let updated = sync::update_student(&client, &mut store, id, &student).await?;
            println!("Updated student #{}", updated.id);
        }
        "delete-student" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "delete-student <id>")?;
            sync::delete_student(&client, &mut store, id).await?;
            println!("Deleted student {id}");
        }
        "add-teacher" => {
            check_identity(&client, &tokens).await?;
            let [name, email] = two(rest, "add-teacher <name> <email>")?;
            let created =
                sync::create_teacher(&client, &mut store, &NewTeacher { name, email }).await?;
            println!("Added teacher #{}", created.id);
        }
        "update-teacher" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "update-teacher <id> <name> <email>")?;
            let [name, email] = two(&rest[1..], "update-teacher <id> <name> <email>")?;
            let updated =
                sync::update_teacher(&client, &mut store, id, &NewTeacher { name, email }).await?;
            println!("Updated teacher #{}", updated.id);
        }
        "delete-teacher" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "delete-teacher <id>")?;
            sync::delete_teacher(&client, &mut store, id).await?;
            println!("Deleted teacher {id}");
        }
        "approve-teacher" => {
            check_identity(&client, &tokens).await?;
            let user_id = parse_id(rest.first(), "approve-teacher <user_id> [name] [email]")?;
            let overrides = ApproveTeacherRequest {
                name: rest.get(1).cloned(),
                email: rest.get(2).cloned(),
            };
            let teacher = client.approve_teacher(user_id, &overrides).await?;
            println!(
                "Approved teacher #{} for user {}",
                teacher.id,
                teacher.user_id.unwrap_or(user_id)
            );
        }
        "my-add-student" => {
            check_identity(&client, &tokens).await?;
            let hint = "my-add-student <classroom_id> <name> <age> <true|false>";
            let classroom_id = parse_id(rest.first(), hint)?;
            match &rest[1..] {
                [name, age, enrolled] => {
                    let student = NewStudent {
                        name: name.clone(),
                        age: age.parse().map_err(|_| usage(format!("expected: {hint}")))?,
                        is_enrolled: parse_bool(enrolled)
                            .ok_or_else(|| usage(format!("expected: {hint}")))?,
                        classroom_id,
                    };
                    let created = client.add_my_student(&student).await?;
                    println!("Added student #{}", created.id);
                }
                _ => return Err(usage(format!("expected: {hint}"))),
            }
        }
        "my-delete-student" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "my-delete-student <id>")?;
            client.delete_my_student(id).await?;
            println!("Deleted student {id}");
        }
        "add-classroom" => {
            check_identity(&client, &tokens).await?;
            let classroom =
                parse_classroom(rest, "add-classroom <name> <grade> <capacity> [teacher_id]")?;
            let created = sync::create_classroom(&client, &mut store, &classroom).await?;
            println!("Added classroom #{}", created.id);
        }
        "update-classroom" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "update-classroom <id> ...")?;
            let classroom = parse_classroom(
                &rest[1..],
                "update-classroom <id> <name> <grade> <capacity> [teacher_id]",
            )?;
            let updated = sync::update_classroom(&client, &mut store, id, &classroom).await?;
            println!("Updated classroom #{}", updated.id);
        }
        "delete-classroom" => {
            check_identity(&client, &tokens).await?;
            let id = parse_id(rest.first(), "delete-classroom <id>")?;
            sync::delete_classroom(&client, &mut store, id).await?;
            println!("Deleted classroom {id}");
        }
        other => return Err(usage(format!("unknown command: {other}"))),
    }

    Ok(())
}

/// The non-admin dashboard: own classrooms, each with its students.
async fn portal_overview(client: &ApiClient) -> Result<(), CommandError> {
    let classrooms = client.my_classrooms().await?;
    if classrooms.is_empty() {
        println!("No classrooms assigned.");
        return Ok(());
    }
    for classroom in classrooms {
        println!(
            "{} (Grade {}, Capacity {})",
            classroom.name, classroom.grade, classroom.capacity
        );
        let students = client.my_classroom_students(classroom.id).await?;
        if students.is_empty() {
            println!("  No students yet.");
            continue;
        }
        for s in students {
            println!("  {} (age {}) enrolled={}", s.name, s.age, s.is_enrolled);
        }
    }
    Ok(())
}

fn two(args: &[String], hint: &str) -> Result<[String; 2], CommandError> {
    match args {
        [a, b] => Ok([a.clone(), b.clone()]),
        _ => Err(usage(format!("expected: {hint}"))),
    }
}

fn parse_id(arg: Option<&String>, hint: &str) -> Result<i64, CommandError> {
    arg.and_then(|a| a.parse().ok())
        .ok_or_else(|| usage(format!("expected: {hint}")))
}

fn parse_bool(arg: &str) -> Option<bool> {
    match arg {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_student(args: &[String], hint: &str) -> Result<NewStudent, CommandError> {
    let err = || usage(format!("expected: {hint}"));
    match args {
        [name, age, enrolled, classroom_id] => Ok(NewStudent {
            name: name.clone(),
            age: age.parse().map_err(|_| err())?,
            is_enrolled: parse_bool(enrolled).ok_or_else(err)?,
            classroom_id: classroom_id.parse().map_err(|_| err())?,
        }),
        _ => Err(err()),
    }
}

fn parse_classroom(args: &[String], hint: &str) -> Result<NewClassroom, CommandError> {
    let err = || usage(format!("expected: {hint}"));
    match args {
        [name, grade, capacity] => Ok(NewClassroom {
            name: name.clone(),
            grade: grade.parse().map_err(|_| err())?,
            capacity: capacity.parse().map_err(|_| err())?,
            teacher_id: None,
        }),
        [name, grade, capacity, teacher_id] => Ok(NewClassroom {
            name: name.clone(),
            grade: grade.parse().map_err(|_| err())?,
            capacity: capacity.parse().map_err(|_| err())?,
            teacher_id: Some(teacher_id.parse().map_err(|_| err())?),
        }),
        _ => Err(err()),
    }
}
