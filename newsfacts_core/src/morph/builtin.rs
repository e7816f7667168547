use super::{Grammeme, GrammemeSet};

/// Closed-class lemmas with their irregular or listed forms.
pub const CLOSED_CLASS: &[(&str, &[&str])] = &[
    (
        "родиться",
        &[
            "родился", "родилась", "родилось", "родились", "родится", "родятся",
        ],
    ),
    (
        "уроженец",
        &[
            "уроженца", "уроженцу", "уроженцем", "уроженце", "уроженцы", "уроженцев",
            "уроженцам", "уроженцами",
        ],
    ),
    (
        "уроженка",
        &[
            "уроженки", "уроженке", "уроженку", "уроженкой", "уроженок", "уроженкам",
        ],
    ),
    ("год", &["года", "году", "годом", "годе", "годы", "годах", "годов"]),
    ("г", &[]),
    ("в", &[]),
    ("во", &[]),
    ("из", &[]),
    ("на", &[]),
    ("с", &[]),
];

pub fn closed_class_grammemes(lemma: &str) -> GrammemeSet {
    match lemma {
        "родиться" => GrammemeSet::of(&[Grammeme::Verb]),
        "г" => GrammemeSet::of(&[Grammeme::Noun, Grammeme::Abbr]),
        "в" | "во" | "из" | "на" | "с" => GrammemeSet::of(&[Grammeme::Prep]),
        _ => GrammemeSet::of(&[Grammeme::Noun]),
    }
}

pub const MONTHS: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь", "октябрь",
    "ноябрь", "декабрь",
];

pub const FIRST_NAMES: &[&str] = &[
    "Иван", "Пётр", "Алексей", "Александр", "Сергей", "Андрей", "Дмитрий", "Михаил", "Николай",
    "Владимир", "Юрий", "Борис", "Павел", "Игорь", "Олег", "Евгений", "Виктор", "Анатолий",
    "Константин", "Георгий", "Фёдор", "Антон", "Максим", "Артём", "Роман", "Денис", "Илья",
    "Никита", "Кирилл", "Григорий", "Василий", "Валерий", "Леонид", "Вячеслав", "Станислав",
    "Егор", "Тимур", "Руслан", "Вадим", "Глеб", "Анна", "Мария", "Елена", "Ольга", "Наталья",
    "Татьяна", "Ирина", "Екатерина", "Светлана", "Юлия", "Анастасия", "Дарья", "Марина",
    "Людмила", "Галина", "Валентина", "Надежда", "Вера", "Алла", "Алина", "Ксения", "Полина",
    "Софья", "Виктория", "Евгения", "Лариса", "Зинаида", "Оксана",
];

pub const PLACES: &[&str] = &[
    "Москва",
    "Санкт-Петербург",
    "Петербург",
    "Ленинград",
    "Новосибирск",
    "Екатеринбург",
    "Казань",
    "Новгород",
    "Самара",
    "Омск",
    "Челябинск",
    "Ростов",
    "Уфа",
    "Красноярск",
    "Пермь",
    "Воронеж",
    "Волгоград",
    "Краснодар",
    "Саратов",
    "Тюмень",
    "Тольятти",
    "Ижевск",
    "Барнаул",
    "Ульяновск",
    "Иркутск",
    "Хабаровск",
    "Ярославль",
    "Владивосток",
    "Махачкала",
    "Томск",
    "Оренбург",
    "Кемерово",
    "Рязань",
    "Астрахань",
    "Пенза",
    "Липецк",
    "Тула",
    "Киров",
    "Калининград",
    "Курск",
    "Тверь",
    "Смоленск",
    "Мурманск",
    "Архангельск",
    "Сочи",
    "Севастополь",
    "Киев",
    "Минск",
    "Одесса",
    "Харьков",
    "Тбилиси",
    "Ереван",
    "Баку",
    "Ташкент",
    "Рига",
    "Вильнюс",
    "Таллин",
    "Лондон",
    "Париж",
    "Берлин",
    "Рим",
    "Мадрид",
    "Вена",
    "Прага",
    "Варшава",
    "Нью-Йорк",
    "Вашингтон",
    "Пекин",
    "Токио",
    "Россия",
    "Украина",
    "Белоруссия",
    "Казахстан",
    "Германия",
    "Франция",
    "Италия",
    "Испания",
    "Англия",
    "Америка",
    "Китай",
    "Япония",
    "Сибирь",
    "Урал",
    "Крым",
    "Кавказ",
];
