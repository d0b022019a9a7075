use steam_user_inventory::{SteamUserInventory, InventoryOptions, EndpointMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let steamid = get_steamid("STEAMID_OTHER");
    let options = InventoryOptions::builder(steamid)
        .appid(730)
        .contextid(2)
        .build();
    let inventory = SteamUserInventory::new()?;
    let items = inventory.load_and_format(&options, EndpointMode::Current).await?;
    
    println!("{} items in inventory", items.len());
    
    if let Some(item) = items.first() {
        println!("First item: {}", item.name().unwrap_or("(no description)"));
    }
    
    Ok(())
}

fn get_steamid(key: &str) -> String {
    dotenv::dotenv().ok();
    
    std::env::var(key)
        .unwrap_or_else(|_| panic!("{key} missing"))
}
