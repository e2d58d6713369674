//! Sample image URLs served when a caller asks for a random image.

use std::time::{SystemTime, UNIX_EPOCH};

/// Images the generator falls back to for `--random` requests.
pub const EXAMPLE_URLS: &[&str] = &[
    "https://media.sproutsocial.com/uploads/meme-example.jpg",
    "https://www.theinterrobang.ca/images/interrobang/030819/B8QC6DAZ9PWRK7M2.jpg",
    "https://www.lpl.com/content/dam/lpl-www/images/newsroom/read/insider/insider-blog-meme-stocks-what-do-they-mean_article-hero-450x450.png",
    "https://imageio.forbes.com/specials-images/imageserve/6322129e876c6dd61a451586/zelda-tears-of-the-kingdom-715x400/960x0.png?format=png&width=960",
    "https://www.zelda.com/tears-of-the-kingdom/_images/game/logo-shadow.png",
    "https://alphagammadelta.org/wp-content/uploads/2017/01/U-Washington.jpg",
    "https://lazowska.cs.washington.edu/GatesCenter.jpg",
    "https://m.media-amazon.com/images/I/61zLPovRaIL.jpg",
    "https://images.seattletimes.com/wp-content/uploads/2016/08/huskyheadlines_cover.jpg?d=780x520",
    "https://files.realpython.com/media/hi_res_plot.832200ce2275.png",
    "https://magazine.washington.edu/columns_wordpress/wp-content/uploads/2021/06/dubs3.jpg",
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTC0PR064Z1RtLDFB7MLtaz23bkUtosG74y2r7PU-O8tQ&usqp=CAU&ec=48665699",
];

/// Pick an example URL. Selection uses the clock's sub-second part, which is
/// plenty for a demo picker.
pub fn random_example_url() -> &'static str {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    EXAMPLE_URLS[nanos as usize % EXAMPLE_URLS.len()]
}
