//! Command-line client for the alumni network.
//!
//! Talks to the database directly through the service layer, so it enforces
//! the same validation and uniqueness rules as the HTTP API. Every command
//! prints its result as pretty-printed JSON.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use alumnet_core::filter::FilterPair;
use alumnet_core::types::DbId;
use alumnet_db::models::alumni::{AlumniField, CreateAlumni, UpdateAlumni};
use alumnet_db::models::event::{CreateEvent, UpdateEvent};
use alumnet_db::models::mentor::{CreateMentor, UpdateMentor};
use alumnet_db::models::mentorship_assignment::UpdateAssignment;
use alumnet_db::models::student::{CreateStudent, StudentField, UpdateStudent};
use alumnet_services::{AlumniService, EventService, MentorshipService, StudentService};

#[derive(Parser)]
#[command(name = "alumnet", version, about = "Alumni network management CLI")]
struct Cli {
    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage alumni profiles.
    #[command(subcommand)]
    Alumni(AlumniCommand),
    /// Manage student profiles.
    #[command(subcommand)]
    Student(StudentCommand),
    /// Manage events.
    #[command(subcommand)]
    Event(EventCommand),
    /// Manage mentors.
    #[command(subcommand)]
    Mentor(MentorCommand),
    /// Manage mentorship assignments.
    #[command(subcommand)]
    Assignment(AssignmentCommand),
}

/// Optional equality filters shared by the event-browsing commands.
#[derive(Args)]
struct EventFilters {
    #[arg(long)]
    name: Option<String>,
    /// Event date in YYYY-MM-DD form.
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    description: Option<String>,
}

impl EventFilters {
    fn into_pairs(self) -> Vec<FilterPair> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name {
            pairs.push(("name".to_string(), name));
        }
        if let Some(date) = self.date {
            pairs.push(("event_date".to_string(), date));
        }
        if let Some(location) = self.location {
            pairs.push(("location".to_string(), location));
        }
        if let Some(description) = self.description {
            pairs.push(("description".to_string(), description));
        }
        pairs
    }
}

/// Optional equality filters for alumni listings.
#[derive(Args)]
struct AlumniFilters {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    industry: Option<String>,
    #[arg(long)]
    graduation_year: Option<String>,
    #[arg(long)]
    location: Option<String>,
}

impl AlumniFilters {
    fn into_pairs(self) -> Vec<FilterPair> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name {
            pairs.push(("name".to_string(), name));
        }
        if let Some(email) = self.email {
            pairs.push(("email".to_string(), email));
        }
        if let Some(industry) = self.industry {
            pairs.push(("industry".to_string(), industry));
        }
        if let Some(year) = self.graduation_year {
            pairs.push(("graduation_year".to_string(), year));
        }
        if let Some(location) = self.location {
            pairs.push(("location".to_string(), location));
        }
        pairs
    }
}

/// Optional equality filters for student listings.
#[derive(Args)]
struct StudentFilters {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    course: Option<String>,
    #[arg(long)]
    year: Option<String>,
}

impl StudentFilters {
    fn into_pairs(self) -> Vec<FilterPair> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name {
            pairs.push(("name".to_string(), name));
        }
        if let Some(email) = self.email {
            pairs.push(("email".to_string(), email));
        }
        if let Some(course) = self.course {
            pairs.push(("course".to_string(), course));
        }
        if let Some(year) = self.year {
            pairs.push(("year".to_string(), year));
        }
        pairs
    }
}

#[derive(Subcommand)]
enum AlumniCommand {
    /// Register a new alumni.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        graduation_year: i32,
        #[arg(long)]
        location: String,
    },
    /// Fetch one alumni by id.
    Get { id: DbId },
    /// List alumni, optionally filtered.
    List {
        #[command(flatten)]
        filters: AlumniFilters,
    },
    /// Exact-match search on one field.
    Search {
        /// One of: name, email, industry, graduation_year, location.
        #[arg(long)]
        field: String,
        #[arg(long)]
        value: String,
    },
    /// Partially update an alumni record.
    Update {
        id: DbId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        graduation_year: Option<i32>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete an alumni record.
    Delete { id: DbId },
    /// Browse events, optionally filtered.
    SearchEvents {
        #[command(flatten)]
        filters: EventFilters,
    },
    /// Register an alumni for an event.
    JoinEvent {
        id: DbId,
        #[arg(long)]
        event_id: DbId,
    },
    /// Events this alumni registered for.
    MyEvents { id: DbId },
}

#[derive(Subcommand)]
enum StudentCommand {
    /// Register a new student.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        course: Option<String>,
        /// Year of study, 1 through 5.
        #[arg(long)]
        year: Option<i32>,
    },
    /// Fetch one student by id.
    Get { id: DbId },
    /// List students, optionally filtered.
    List {
        #[command(flatten)]
        filters: StudentFilters,
    },
    /// Exact-match search on one field.
    Search {
        /// One of: name, email, course, year.
        #[arg(long)]
        field: String,
        #[arg(long)]
        value: String,
    },
    /// Partially update a student record.
    Update {
        id: DbId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Delete a student record.
    Delete { id: DbId },
    /// Browse events, optionally filtered.
    SearchEvents {
        #[command(flatten)]
        filters: EventFilters,
    },
    /// Register a student for an event.
    JoinEvent {
        id: DbId,
        #[arg(long)]
        event_id: DbId,
    },
    /// Events this student registered for.
    MyEvents { id: DbId },
    /// List every registered mentor.
    ListMentors,
    /// Enter a mentorship with a mentor.
    JoinMentorship {
        id: DbId,
        #[arg(long)]
        mentor_id: DbId,
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },
    /// Mentorship assignments this student belongs to.
    MyMentors { id: DbId },
}

#[derive(Subcommand)]
enum EventCommand {
    /// Create a new event.
    Add {
        #[arg(long)]
        name: String,
        /// Event date in YYYY-MM-DD form.
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        location: String,
        #[arg(long)]
        description: String,
    },
    /// Fetch one event by id.
    Get { id: DbId },
    /// List events ordered by date, optionally filtered.
    List {
        #[command(flatten)]
        filters: EventFilters,
    },
    /// Partially update an event.
    Update {
        id: DbId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event.
    Delete { id: DbId },
    /// Users registered for an event.
    Participants { id: DbId },
}

#[derive(Subcommand)]
enum MentorCommand {
    /// Register an existing alumni as a mentor.
    Register {
        #[arg(long)]
        alumni_id: DbId,
        #[arg(long)]
        skills: Option<String>,
    },
    /// Fetch one mentor by id.
    Get { id: DbId },
    /// List all mentors.
    List,
    /// Update a mentor's skills.
    Update {
        id: DbId,
        #[arg(long)]
        skills: Option<String>,
    },
    /// Delete a mentor.
    Delete { id: DbId },
    /// Assignments held by this mentor.
    Students { id: DbId },
}

#[derive(Subcommand)]
enum AssignmentCommand {
    /// List all mentorship assignments.
    List,
    /// Fetch one assignment by id.
    Get { id: DbId },
    /// Update an assignment's date bounds.
    Update {
        id: DbId,
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },
    /// Delete an assignment.
    Delete { id: DbId },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let pool = alumnet_db::create_pool(&cli.database_url)
        .await
        .context("Failed to connect to the database")?;
    alumnet_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    match cli.command {
        Command::Alumni(cmd) => run_alumni(AlumniService::new(pool), cmd).await,
        Command::Student(cmd) => run_student(StudentService::new(pool), cmd).await,
        Command::Event(cmd) => run_event(EventService::new(pool), cmd).await,
        Command::Mentor(cmd) => run_mentor(MentorshipService::new(pool), cmd).await,
        Command::Assignment(cmd) => run_assignment(MentorshipService::new(pool), cmd).await,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_alumni(service: AlumniService, cmd: AlumniCommand) -> anyhow::Result<()> {
    match cmd {
        AlumniCommand::Add {
            name,
            email,
            industry,
            graduation_year,
            location,
        } => {
            let input = CreateAlumni {
                name,
                email,
                industry,
                graduation_year,
                location,
            };
            print_json(&service.add_alumni(&input).await?)
        }
        AlumniCommand::Get { id } => print_json(&service.get_alumni(id).await?),
        AlumniCommand::List { filters } => {
            print_json(&service.list_alumni(&filters.into_pairs()).await?)
        }
        AlumniCommand::Search { field, value } => {
            let field: AlumniField = field.parse().map_err(anyhow::Error::msg)?;
            print_json(&service.search_alumni(field, &value).await?)
        }
        AlumniCommand::Update {
            id,
            name,
            email,
            industry,
            graduation_year,
            location,
        } => {
            let updates = UpdateAlumni {
                name,
                email,
                industry,
                graduation_year,
                location,
            };
            print_json(&service.update_alumni(id, &updates).await?)
        }
        AlumniCommand::Delete { id } => {
            let removed = service.remove_alumni(id).await?;
            print_json(&json!({ "deleted": removed }))
        }
        AlumniCommand::SearchEvents { filters } => {
            print_json(&service.search_events(&filters.into_pairs()).await?)
        }
        AlumniCommand::JoinEvent { id, event_id } => {
            print_json(&service.join_event(id, event_id).await?)
        }
        AlumniCommand::MyEvents { id } => print_json(&service.list_my_events(id).await?),
    }
}

async fn run_student(service: StudentService, cmd: StudentCommand) -> anyhow::Result<()> {
    match cmd {
        StudentCommand::Add {
            name,
            email,
            course,
            year,
        } => {
            let input = CreateStudent {
                name,
                email,
                course,
                year,
            };
            print_json(&service.create_student(&input).await?)
        }
        StudentCommand::Get { id } => print_json(&service.get_student(id).await?),
        StudentCommand::List { filters } => {
            print_json(&service.list_students(&filters.into_pairs()).await?)
        }
        StudentCommand::Search { field, value } => {
            let field: StudentField = field.parse().map_err(anyhow::Error::msg)?;
            print_json(&service.search_students(field, &value).await?)
        }
        StudentCommand::Update {
            id,
            name,
            email,
            course,
            year,
        } => {
            let updates = UpdateStudent {
                name,
                email,
                course,
                year,
            };
            print_json(&service.update_student(id, &updates).await?)
        }
        StudentCommand::Delete { id } => {
            let removed = service.delete_student(id).await?;
            print_json(&json!({ "deleted": removed }))
        }
        StudentCommand::SearchEvents { filters } => {
            print_json(&service.search_events(&filters.into_pairs()).await?)
        }
        StudentCommand::JoinEvent { id, event_id } => {
            print_json(&service.join_event(id, event_id).await?)
        }
        StudentCommand::MyEvents { id } => print_json(&service.list_my_events(id).await?),
        StudentCommand::ListMentors => print_json(&service.list_all_mentors().await?),
        StudentCommand::JoinMentorship {
            id,
            mentor_id,
            start_date,
            end_date,
        } => print_json(
            &service
                .join_mentorship(id, mentor_id, start_date, end_date)
                .await?,
        ),
        StudentCommand::MyMentors { id } => print_json(&service.list_my_mentors(id).await?),
    }
}

async fn run_event(service: EventService, cmd: EventCommand) -> anyhow::Result<()> {
    match cmd {
        EventCommand::Add {
            name,
            date,
            location,
            description,
        } => {
            let input = CreateEvent {
                name,
                event_date: date,
                location,
                description,
            };
            print_json(&service.add_event(&input).await?)
        }
        EventCommand::Get { id } => print_json(&service.get_event(id).await?),
        EventCommand::List { filters } => {
            print_json(&service.list_events(&filters.into_pairs()).await?)
        }
        EventCommand::Update {
            id,
            name,
            date,
            location,
            description,
        } => {
            let updates = UpdateEvent {
                name,
                event_date: date,
                location,
                description,
            };
            print_json(&service.update_event(id, &updates).await?)
        }
        EventCommand::Delete { id } => {
            let removed = service.delete_event(id).await?;
            print_json(&json!({ "deleted": removed }))
        }
        EventCommand::Participants { id } => print_json(&service.list_participants(id).await?),
    }
}

async fn run_mentor(service: MentorshipService, cmd: MentorCommand) -> anyhow::Result<()> {
    match cmd {
        MentorCommand::Register { alumni_id, skills } => {
            let input = CreateMentor { alumni_id, skills };
            print_json(&service.create_mentor(&input).await?)
        }
        MentorCommand::Get { id } => print_json(&service.get_mentor(id).await?),
        MentorCommand::List => print_json(&service.list_mentors().await?),
        MentorCommand::Update { id, skills } => {
            let updates = UpdateMentor { skills };
            print_json(&service.update_mentor(id, &updates).await?)
        }
        MentorCommand::Delete { id } => {
            let removed = service.delete_mentor(id).await?;
            print_json(&json!({ "deleted": removed }))
        }
        MentorCommand::Students { id } => print_json(&service.list_students_by_mentor(id).await?),
    }
}

async fn run_assignment(service: MentorshipService, cmd: AssignmentCommand) -> anyhow::Result<()> {
    match cmd {
        AssignmentCommand::List => print_json(&service.list_assignments().await?),
        AssignmentCommand::Get { id } => print_json(&service.get_assignment(id).await?),
        AssignmentCommand::Update {
            id,
            start_date,
            end_date,
        } => {
            let updates = UpdateAssignment {
                start_date,
                end_date,
            };
            print_json(&service.update_assignment(id, &updates).await?)
        }
        AssignmentCommand::Delete { id } => {
            let removed = service.delete_assignment(id).await?;
            print_json(&json!({ "deleted": removed }))
        }
    }
}
