use crate::content::FooterCopy;
use chrono::Datelike;
use leptos::prelude::*;

/// Year shown in the copyright line, from the local clock at render time.
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer(copy: &'static FooterCopy) -> impl IntoView {
    let notice = format!("© {} {}. All rights reserved.", copyright_year(), copy.owner);
    view! {
        <footer class="site-footer">
            {notice}
            <div class="footer-credit">
                "Powered by "
                <a href=copy.credit_href>{copy.credit_label}</a>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_follows_the_local_calendar() {
        let before = chrono::Local::now().year();
        let year = copyright_year();
        let after = chrono::Local::now().year();
        assert!(year == before || year == after);
    }
}
