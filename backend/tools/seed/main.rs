use backend::conf::{Conf, Env, EnvConf};
use clap::Parser;

fn main() {
    let args = Cli::parse();

    let env = Env::derive();
    let conf = Conf::new(env, EnvConf::derive(env));

    println!(
        "seeding {} articles into a {:?} instance",
        args.count, conf.db.storage_engine
    );

    let db = conf.db.db_instance();
    backend::db::init_db(&db);

    for i in 1..=args.count {
        let news = interfacing::News {
            title: format!("{} #{}", args.title_prefix, i),
            body: format!("Generated body for article #{}", i),
            category: args.category.clone(),
            image_url: None,
            is_breaking: args.breaking,
            breaking_url: String::new(),
            created_at: interfacing::News::formatted_now(),
        };

        let id = uuid::Uuid::new_v4();
        backend::db::q::put_news(&db, id, &news).unwrap();
        println!("put news {} {:?}", id, news.title);
    }
}

/// Fill the news table with placeholder articles.
#[derive(clap::Parser, Debug)]
struct Cli {
    /// How many articles to create
    #[arg(short, long, default_value_t = 12)]
    count: usize,

    /// Category to file them under
    #[arg(long, default_value = "general")]
    category: String,

    /// Title prefix
    #[arg(long, default_value = "Seeded story")]
    title_prefix: String,

    /// Mark the articles as breaking news
    #[arg(long)]
    breaking: bool,
}
