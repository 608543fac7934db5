use backend::conf::{Conf, Env, EnvConf};
use backend::startup::Application;
use backend::trace;

#[tokio::main]
async fn main() -> hyper::Result<()> {
    let env = Env::derive();
    let conf = Conf::new(env, EnvConf::derive(env));

    let subscriber = trace::TracingSubscriber::new("newsdesk")
        .pretty(conf.log.pretty)
        .build(std::io::stdout);
    trace::init_global_default(subscriber);

    tracing::info!("ENV={}", conf.env);

    let application = Application::build(&conf).await;

    application.server().await
}
