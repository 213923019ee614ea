use eduverse_core::abi::ContractHandle;
use eduverse_core::app::{self, CatalogState, WalletSession};
use eduverse_core::chat::ChatChannel;
use eduverse_core::client::NodeClient;
use eduverse_core::config::AppConfig;
use eduverse_core::error::{ErrorKind, Result};
use eduverse_core::model::dtos::{CreateCourseParams, EnrollParams};
use eduverse_core::model::structs::{Balance, Course};

fn usage(program: &str) -> String {
    format!(
        "Usage:
  {program} courses
  {program} enroll <course_id> <value>
  {program} create <title> <description> <max_students> <start_time> <end_time> <price> <metadata_hash>
  {program} chat <message>"
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("{}", usage(&args[0]));
        return Ok(());
    }

    let config = AppConfig::default();

    if args[1] == "chat" {
        let message = args.get(2).map(String::as_str).unwrap_or("ping");
        return run_chat(&config, message).await;
    }

    // Fixed initialization order: client, contract handle, then the session.
    let client = NodeClient::new(&config)?;
    let handle = ContractHandle::from_artifact(&config.contract_address)?;

    let mut session = WalletSession::new();
    let account = match session.connect(&client, &config.app_name).await {
        Ok(account) => account,
        Err(e) => {
            eprintln!("{e}");
            return Err(e);
        }
    };
    println!("Connected as: {}", account.address);

    let mut catalog = CatalogState::new();
    catalog.refresh(&client, &handle, &account.address).await;
    if let Some(ref error) = catalog.error {
        eprintln!("{error}");
    }
    print_courses(&catalog);

    match args[1].as_str() {
        "courses" => {}
        "enroll" => {
            let course_id: u32 = parse_arg(&args, 2, "course_id")?;
            let value: Balance = parse_arg(&args, 3, "value")?;

            if catalog.is_enrolled(course_id) {
                println!("Already enrolled in course {course_id}");
            } else {
                app::enroll(
                    &client,
                    &handle,
                    &account.address,
                    EnrollParams { course_id, value },
                )
                .await?;
                println!("Enroll transaction submitted for course {course_id}");

                // No optimistic update: re-fetch to see the new state.
                catalog.refresh(&client, &handle, &account.address).await;
                print_courses(&catalog);
            }
        }
        "create" => {
            if args.len() < 9 {
                println!("{}", usage(&args[0]));
                return Ok(());
            }
            let params = CreateCourseParams {
                title: args[2].clone(),
                description: args[3].clone(),
                max_students: parse_arg(&args, 4, "max_students")?,
                start_time: parse_arg(&args, 5, "start_time")?,
                end_time: parse_arg(&args, 6, "end_time")?,
                price: parse_arg(&args, 7, "price")?,
                metadata_hash: args[8].clone(),
            };
            app::create_course(&client, &handle, &account.address, params).await?;
            println!("Course creation transaction submitted");

            catalog.refresh(&client, &handle, &account.address).await;
            print_courses(&catalog);
        }
        other => {
            println!("Unknown command: {other}");
            println!("{}", usage(&args[0]));
        }
    }

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, name: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let raw = args
        .get(idx)
        .ok_or_else(|| ErrorKind::ParseError(format!("missing argument: {name}")))?;
    raw.parse()
        .map_err(|e| ErrorKind::ParseError(format!("invalid {name}: {e}")).into())
}

async fn run_chat(config: &AppConfig, message: &str) -> Result<()> {
    let mut channel = ChatChannel::connect(&config.ws_url).await?;
    channel.set_input(message);
    channel.send().await?;

    if let Some(reply) = channel.recv().await? {
        println!("Message from server: {reply}");
    }
    channel.close().await?;

    for line in channel.log.lines() {
        println!("{line}");
    }
    Ok(())
}

fn print_courses(catalog: &CatalogState) {
    println!("==================All Courses==================");
    for course in &catalog.courses {
        print_course_row(course, catalog.is_enrolled(course.id));
    }

    println!("================Enrolled Courses================");
    for course in &catalog.enrolled {
        print_course_row(course, true);
    }
    println!("================================================");
}

fn print_course_row(course: &Course, enrolled: bool) {
    println!(
        "[{:<4}] {:<24} teacher: {:<12} seats: {}/{:<6} price: {:<14} {}",
        course.id,
        course.title,
        short_address(&course.teacher),
        course.enrolled_count,
        course.max_students,
        course.price,
        if enrolled { "enrolled" } else { "" }
    );
}

fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
