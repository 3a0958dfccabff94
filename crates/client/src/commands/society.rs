use clap::{Args, Subcommand};
use contracts::domain::a001_society::{Society, SocietyUpdateDto, AMENITIES};

use super::{print_json, Context};
use crate::error::{ClientError, ClientResult};

#[derive(Args, Debug)]
pub struct SocietyArgs {
    #[command(subcommand)]
    pub command: SocietyCommands,
}

#[derive(Subcommand, Debug)]
pub enum SocietyCommands {
    /// Show the society profile
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Change profile fields; unspecified fields keep their current value
    Update(UpdateArgs),
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub registration_number: Option<String>,

    #[arg(long)]
    pub wings: Option<i32>,

    #[arg(long)]
    pub floors: Option<i32>,

    #[arg(long)]
    pub flats: Option<i32>,

    /// Add the amenity if missing, remove it if present (repeatable)
    #[arg(long = "toggle-amenity", value_name = "AMENITY")]
    pub toggle_amenity: Vec<String>,
}

impl UpdateArgs {
    /// Накладывает флаги на текущие значения формы
    pub fn apply(self, form: &mut SocietyUpdateDto) -> ClientResult<()> {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(address) = self.address {
            form.address = address;
        }
        if let Some(number) = self.registration_number {
            form.registration_number = number;
        }
        if self.wings.is_some() {
            form.total_wings = self.wings;
        }
        if self.floors.is_some() {
            form.total_floors = self.floors;
        }
        if self.flats.is_some() {
            form.total_flats = self.flats;
        }

        for requested in &self.toggle_amenity {
            let amenity = AMENITIES
                .iter()
                .find(|a| a.eq_ignore_ascii_case(requested.trim()))
                .ok_or_else(|| {
                    ClientError::Validation(format!(
                        "Unknown amenity '{}'. Known: {}",
                        requested,
                        AMENITIES.join(", ")
                    ))
                })?;
            form.toggle_amenity(amenity);
        }
        Ok(())
    }
}

pub async fn execute(ctx: &Context, args: SocietyArgs) -> ClientResult<()> {
    ctx.require_session()?;
    let society_id = ctx.society_id();

    match args.command {
        SocietyCommands::Show { json } => {
            let society = ctx.client.get_society(society_id).await?;
            if json {
                return print_json(&society);
            }
            print_society(&society);
            Ok(())
        }
        SocietyCommands::Update(update) => {
            let society = ctx.client.get_society(society_id).await?;
            let mut form = SocietyUpdateDto::from(&society);
            update.apply(&mut form)?;

            ctx.client.update_society(society_id, &form).await?;
            tracing::info!("Society {} updated", society_id);
            println!("Society profile updated successfully!");
            Ok(())
        }
    }
}

fn count(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_society(society: &Society) {
    println!("{} (#{})", society.name, society.id);
    println!("Address:       {}", society.address.as_deref().unwrap_or(""));
    println!(
        "Registration:  {}",
        society.registration_number.as_deref().unwrap_or("")
    );
    println!(
        "Wings/Floors/Flats: {} / {} / {}",
        count(society.total_wings),
        count(society.total_floors),
        count(society.total_flats)
    );
    if let Some(status) = &society.subscription_status {
        println!("Subscription:  {}", status);
    }
    println!("Amenities:");
    for amenity in AMENITIES {
        let mark = if society.amenities.iter().any(|a| a == amenity) {
            "x"
        } else {
            " "
        };
        println!("  [{}] {}", mark, amenity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_args_keep_unspecified_fields() {
        let mut form = SocietyUpdateDto {
            name: "Green Acres".into(),
            address: "MG Road".into(),
            total_wings: Some(3),
            amenities: vec!["Clubhouse".into(), "Gymnasium".into()],
            ..Default::default()
        };

        UpdateArgs {
            flats: Some(120),
            toggle_amenity: vec!["clubhouse".into(), "Solar Power".into()],
            ..Default::default()
        }
        .apply(&mut form)
        .unwrap();

        assert_eq!(form.name, "Green Acres");
        assert_eq!(form.total_wings, Some(3));
        assert_eq!(form.total_flats, Some(120));
        assert_eq!(form.amenities, vec!["Gymnasium", "Solar Power"]);
    }

    #[test]
    fn test_unknown_amenity_is_rejected() {
        let mut form = SocietyUpdateDto::default();
        let err = UpdateArgs {
            toggle_amenity: vec!["Helipad".into()],
            ..Default::default()
        }
        .apply(&mut form)
        .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(form.amenities.is_empty());
    }
}
