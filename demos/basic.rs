use dotted_config::{AppContext, Config, TreeHandle, TreeStore, Value};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct AppSection {
    name: String,
    debug: bool,
}

#[derive(Debug, Serialize)]
struct Mysql {
    host: String,
    port: u16,
}

#[derive(Debug, Serialize)]
struct Drivers {
    mysql: Mysql,
}

#[derive(Debug, Serialize)]
struct DatabaseSection {
    drivers: Drivers,
    encoding: String,
}

fn main() -> Result<(), dotted_config::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The host owns the trees; the config only reaches them by name.
    let store = TreeStore::new();
    store.insert(
        "app_config",
        TreeHandle::from_serialize(&AppSection {
            name: "demo".into(),
            debug: false,
        })?,
    );
    store.insert(
        "db_config",
        TreeHandle::from_serialize(&DatabaseSection {
            drivers: Drivers {
                mysql: Mysql {
                    host: "localhost".into(),
                    port: 3306,
                },
            },
            encoding: "UTF8".into(),
        })?,
    );

    let ctx = AppContext::builder()
        .with_config(Config::new(store.clone()))
        .build()?;
    let config = ctx.config();

    println!("App: {}", config.get("app.name", "unnamed"));
    println!("Debug (falsy, so default): {}", config.get("app.debug", "off"));
    println!("Encoding: {}", config.get("database.encoding", ""));

    config.set("database.drivers.mysql.host", "10.0.0.1");
    println!("MySQL host: {}", config.get("database.drivers.mysql.host", ""));

    let added = config.set("database.drivers.oracle", "oracle11i");
    println!("Set missing key: {added}");
    println!("Engine: {}", config.get("database.engine", Value::from("innoDB")));

    if let Some(db) = store.get("db_config") {
        println!("Host sees: {}", db.read()["drivers"]["mysql"]["host"]);
    }

    Ok(())
}
