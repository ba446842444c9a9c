//! Static city texts: descriptions and tourist advice, each with an explicit fallback for unknown cities.

use std::collections::HashMap;

pub const DESCRIPTION_FALLBACK: &str = "Описание города не найдено.";
pub const ADVICE_FALLBACK: &str = "😭 Советы для туристов отсутствуют для данного города.";

const TICKETS_HINT: &str = "\n\n✈️ Кстати дешёвые билеты можно купить на aviasales.ru";

const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Москва",
        "Столица России, известна своим богатым культурным наследием и историческими памятниками.",
    ),
    (
        "Норильск",
        "Известен суровыми климатическими условиями и значимыми горнодобывающими предприятиями.",
    ),
    (
        "Красноярск",
        "Город на Енисе с уникальной природой и промышленным развитием.",
    ),
    (
        "Калининград",
        "Уникальный город с немецким наследием и особенностями морского климата.",
    ),
];

const ADVICE: &[(&str, &str)] = &[
    (
        "Москва",
        "Не пропустите посещение Красной площади и Кремля. \
         Также советуем прогуляться по Арбату и посетить местные музеи.",
    ),
    (
        "Норильск",
        "Одевайтесь тепло и подготовьтесь к северному климату. \
         Рекомендуем экскурсии по добывающим предприятиям и природным достопримечательностям.",
    ),
    (
        "Красноярск",
        "Насладитесь видами Енисея, попробуйте местную кухню и посетите природу в окрестностях города.",
    ),
    (
        "Калининград",
        "Изучите архитектурное наследие, посетите местные музеи и насладитесь морским климатом.",
    ),
];

/// City name → text, with a fixed answer for cities it does not know.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, String>,
    fallback: String,
}

impl Catalog {
    pub fn new<N, T>(entries: impl IntoIterator<Item = (N, T)>, fallback: impl Into<String>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, text)| (name.into(), text.into()))
                .collect(),
            fallback: fallback.into(),
        }
    }

    /// City descriptions shown first after a selection.
    pub fn descriptions() -> Self {
        Self::new(DESCRIPTIONS.iter().copied(), DESCRIPTION_FALLBACK)
    }

    /// Tourist advice shown last; every entry ends with the tickets hint.
    pub fn advice() -> Self {
        Self::new(
            ADVICE
                .iter()
                .map(|(name, text)| (*name, format!("{}{}", text, TICKETS_HINT))),
            ADVICE_FALLBACK,
        )
    }

    /// Text for the city, or the fallback.
    pub fn get(&self, city: &str) -> &str {
        match self.entries.get(city) {
            Some(text) => text,
            None => &self.fallback,
        }
    }

    pub fn contains(&self, city: &str) -> bool {
        self.entries.contains_key(city)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
