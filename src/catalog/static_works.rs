use serde::{Deserialize, Serialize};

/// Sentinel category matching every work in the filter bar.
pub const ALL_CATEGORY: &str = "Все";

/// One entry of the showcase catalog compiled into the application.
/// Unlike [`super::WorkItem`] these are not mutable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticWork {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub main_image: String,
    pub images: Vec<String>,
    pub description: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    pub tags: Vec<String>,
}

/// Works with a price, optionally narrowed to one category.
/// `None` and [`ALL_CATEGORY`] both mean "no category filter".
pub fn priced_works<'a>(works: &'a [StaticWork], category: Option<&str>) -> Vec<&'a StaticWork> {
    works
        .iter()
        .filter(|work| work.price.is_some())
        .filter(|work| match category {
            None | Some(ALL_CATEGORY) => true,
            Some(c) => work.category == c,
        })
        .collect()
}

/// Filter-bar categories: "Все" followed by the distinct work categories
/// in first-appearance order.
pub fn filter_bar_categories(works: &[StaticWork]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for work in works {
        if !categories.contains(&work.category) {
            categories.push(work.category.clone());
        }
    }
    categories
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The built-in showcase catalog.
pub fn builtin_works() -> Vec<StaticWork> {
    vec![
        StaticWork {
            id: 1,
            title: "Премиум Брендинг".to_string(),
            category: "Брендинг".to_string(),
            main_image: "img/b60e482f-22c1-4fc0-8a8e-92e69faaba3d.jpg".to_string(),
            images: strings(&[
                "img/b60e482f-22c1-4fc0-8a8e-92e69faaba3d.jpg",
                "img/1ce88ef7-96ce-4a07-baf6-b34e46369b4b.jpg",
                "img/4e931031-2666-4787-9bd9-fe6d6569a1ae.jpg",
            ]),
            description: "Элегантная айдентика для премиум бренда с изысканными деталями"
                .to_string(),
            details: "Полный комплект брендинга включает логотип, фирменный стиль, визитки, \
                      бланки и руководство по использованию. Проект выполнен в роскошной \
                      цветовой гамме с золотыми акцентами."
                .to_string(),
            price: Some(85_000),
            tags: strings(&["Логотип", "Фирменный стиль", "Премиум"]),
        },
        StaticWork {
            id: 2,
            title: "Веб-Дизайн Студии".to_string(),
            category: "Веб-дизайн".to_string(),
            main_image: "img/4e931031-2666-4787-9bd9-fe6d6569a1ae.jpg".to_string(),
            images: strings(&[
                "img/4e931031-2666-4787-9bd9-fe6d6569a1ae.jpg",
                "img/b60e482f-22c1-4fc0-8a8e-92e69faaba3d.jpg",
                "img/1ce88ef7-96ce-4a07-baf6-b34e46369b4b.jpg",
            ]),
            description: "Современный адаптивный дизайн для творческой студии".to_string(),
            details: "Полная разработка UX/UI дизайна сайта с учетом современных трендов. \
                      Адаптивная верстка для всех устройств, интерактивные элементы и \
                      плавные анимации."
                .to_string(),
            price: Some(120_000),
            tags: strings(&["UX/UI", "Адаптив", "Анимации"]),
        },
        StaticWork {
            id: 3,
            title: "Люкс Упаковка".to_string(),
            category: "Упаковка".to_string(),
            main_image: "img/1ce88ef7-96ce-4a07-baf6-b34e46369b4b.jpg".to_string(),
            images: strings(&[
                "img/1ce88ef7-96ce-4a07-baf6-b34e46369b4b.jpg",
                "img/4e931031-2666-4787-9bd9-fe6d6569a1ae.jpg",
                "img/b60e482f-22c1-4fc0-8a8e-92e69faaba3d.jpg",
            ]),
            description: "Роскошный дизайн упаковки премиум продукта".to_string(),
            details: "Эксклюзивная упаковка с использованием премиум материалов, тиснения \
                      золотой фольгой и специальных покрытий. Полный цикл от концепции до \
                      производства."
                .to_string(),
            price: Some(95_000),
            tags: strings(&["Премиум", "Тиснение", "Эксклюзив"]),
        },
        StaticWork {
            id: 4,
            title: "Мобильное Приложение".to_string(),
            category: "UI/UX".to_string(),
            main_image: "img/4e931031-2666-4787-9bd9-fe6d6569a1ae.jpg".to_string(),
            images: strings(&[
                "img/4e931031-2666-4787-9bd9-fe6d6569a1ae.jpg",
                "img/1ce88ef7-96ce-4a07-baf6-b34e46369b4b.jpg",
            ]),
            description: "Интуитивный дизайн мобильного приложения".to_string(),
            details: "Полный дизайн мобильного приложения с продуманным пользовательским \
                      опытом, современным интерфейсом и удобной навигацией."
                .to_string(),
            price: Some(150_000),
            tags: strings(&["Mobile", "UX Research", "Прототипирование"]),
        },
        StaticWork {
            id: 5,
            title: "Корпоративная Айдентика".to_string(),
            category: "Брендинг".to_string(),
            main_image: "img/b60e482f-22c1-4fc0-8a8e-92e69faaba3d.jpg".to_string(),
            images: strings(&[
                "img/b60e482f-22c1-4fc0-8a8e-92e69faaba3d.jpg",
                "img/1ce88ef7-96ce-4a07-baf6-b34e46369b4b.jpg",
            ]),
            description: "Профессиональная корпоративная айдентика".to_string(),
            details: "Разработка полного пакета корпоративной айдентики для крупной \
                      компании, включая логотип, брендбук и применение на всех носителях."
                .to_string(),
            price: Some(200_000),
            tags: strings(&["Корпоратив", "Брендбук", "Масштабируемость"]),
        },
        StaticWork {
            id: 6,
            title: "E-commerce Дизайн".to_string(),
            category: "Веб-дизайн".to_string(),
            main_image: "img/4e931031-2666-4787-9bd9-fe6d6569a1ae.jpg".to_string(),
            images: strings(&[
                "img/4e931031-2666-4787-9bd9-fe6d6569a1ae.jpg",
                "img/b60e482f-22c1-4fc0-8a8e-92e69faaba3d.jpg",
            ]),
            description: "Современный дизайн интернет-магазина".to_string(),
            details: "Дизайн e-commerce платформы с фокусом на конверсию и удобство \
                      покупок. Оптимизация всех этапов покупательского пути."
                .to_string(),
            price: Some(180_000),
            tags: strings(&["E-commerce", "Конверсия", "UX"]),
        },
    ]
}
