//! User-facing texts and message formatting.

use dbot_core::{InlineButton, InlineKeyboard};
use weather_client::WeatherSnapshot;

use crate::cities::{callback_data, CityRegistry};

pub const WELCOME_TEXT: &str = "Добро пожаловать! Выберите город:";
pub const UNSUPPORTED_CITY_ALERT: &str = "Выбранный город не поддерживается.";
pub const WEATHER_UNAVAILABLE_ALERT: &str = "Не удалось получить данные о погоде.";

/// One button per registered city, one per row, in registry order.
pub fn city_menu(registry: &CityRegistry) -> InlineKeyboard {
    InlineKeyboard::single_column(
        registry
            .display_names()
            .map(|name| InlineButton::new(name, callback_data(name))),
    )
}

pub fn description_message(city: &str, description: &str) -> String {
    format!("{}: {}", city, description)
}

/// Temperature, description, humidity and wind speed, in that order, values as received.
pub fn weather_message(city: &str, weather: &WeatherSnapshot) -> String {
    format!(
        "Погода в {}:\n\
         🌡️ Температура: {}°C\n\
         ☁️ Описание: {}\n\
         💧 Влажность: {}%\n\
         💨 Скорость ветра: {} м/с",
        city, weather.temperature, weather.description, weather.humidity, weather.wind_speed
    )
}

pub fn advice_message(advice: &str) -> String {
    format!(" ⭐ Полезные советы для туристов:\n{}", advice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_message_layout() {
        let weather = WeatherSnapshot {
            temperature: 5.0,
            description: "облачно".to_string(),
            humidity: 80,
            wind_speed: 3.0,
        };
        assert_eq!(
            weather_message("Москва", &weather),
            "Погода в Москва:\n🌡️ Температура: 5°C\n☁️ Описание: облачно\n💧 Влажность: 80%\n💨 Скорость ветра: 3 м/с"
        );
    }

    #[test]
    fn test_weather_message_keeps_fractions_and_sign() {
        let weather = WeatherSnapshot {
            temperature: -12.34,
            description: "снег".to_string(),
            humidity: 93,
            wind_speed: 7.5,
        };
        let text = weather_message("Норильск", &weather);
        assert!(text.contains("🌡️ Температура: -12.34°C"));
        assert!(text.contains("💨 Скорость ветра: 7.5 м/с"));
    }

    #[test]
    fn test_city_menu_matches_registry() {
        let menu = city_menu(&CityRegistry::default());
        let buttons: Vec<(&str, &str)> = menu
            .buttons()
            .map(|b| (b.text.as_str(), b.callback_data.as_str()))
            .collect();
        assert_eq!(
            buttons,
            vec![
                ("Москва", "city_Москва"),
                ("Норильск", "city_Норильск"),
                ("Красноярск", "city_Красноярск"),
                ("Калининград", "city_Калининград"),
            ]
        );
        assert!(menu.rows.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn test_description_and_advice_messages() {
        assert_eq!(description_message("Москва", "Столица."), "Москва: Столица.");
        assert_eq!(
            advice_message("Гуляйте."),
            " ⭐ Полезные советы для туристов:\nГуляйте."
        );
    }
}
