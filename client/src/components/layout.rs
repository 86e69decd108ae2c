//! Shared page chrome: header, footer, and the main content grid.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="w-full border-b border-slate-100 print:hidden">
            <nav class="flex flex-row items-center max-w-4xl gap-6 px-4 py-3 mx-auto">
                <a href="/" class="mr-auto text-xl font-bold tracking-tight">
                    "Lessongo"
                </a>
                <a href="/lessons" class="font-medium hover:underline underline-offset-2">
                    "Lesson plans"
                </a>
                <a href="/lessons/new" class="font-medium hover:underline underline-offset-2">
                    "New lesson"
                </a>
                <a href="/account" class="font-medium hover:underline underline-offset-2">
                    "Account"
                </a>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full py-8 mt-16 text-sm text-center border-t text-slate-500 border-slate-100 print:hidden">
            <p>"Lessongo — lesson plans with superhuman speed."</p>
        </footer>
    }
}

/// Grid wrapper used by the authenticated pages.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen">
            <Header/>
            <main class="grid flex-1 w-full grid-cols-12 gap-4 px-4 mx-auto max-w-5xl">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}
