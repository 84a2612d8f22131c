use super::GameId;
use log::debug;

/// Client-side navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Game(GameId),
    About,
}

impl Route {
    pub fn all() -> Vec<Route> {
        let mut routes = vec![Route::Home];
        routes.extend(GameId::all().into_iter().map(Route::Game));
        routes.push(Route::About);
        routes
    }

    /// Unknown paths fall back to the home page.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/about" => Route::About,
            other => match other.strip_prefix('/').and_then(GameId::from_key) {
                Some(game) => Route::Game(game),
                None => {
                    debug!(target: "route", "Unknown path {:?}, showing home", path);
                    Route::Home
                }
            },
        }
    }

    /// The start route from a command line such as `enissa /puzzle`. The
    /// first item is the program name.
    pub fn from_args<I, S>(args: I) -> Route
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        args.into_iter()
            .nth(1)
            .map(|path| Route::parse(path.as_ref()))
            .unwrap_or(Route::Home)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Game(game) => game.path(),
            Route::About => "/about".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/math"), Route::Game(GameId::Math));
        assert_eq!(
            Route::parse("/toothbrushing/"),
            Route::Game(GameId::ToothBrushing)
        );
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(Route::parse("/nowhere"), Route::Home);
        assert_eq!(Route::parse("math"), Route::Home);
    }

    #[test]
    fn test_every_route_parses_back_from_its_path() {
        let routes = Route::all();
        assert_eq!(routes.len(), 12);
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_start_route_from_args() {
        assert_eq!(Route::from_args(["enissa"]), Route::Home);
        assert_eq!(
            Route::from_args(["enissa", "/puzzle"]),
            Route::Game(GameId::Puzzle)
        );
        assert_eq!(Route::from_args(["enissa", "/quatsch"]), Route::Home);
        assert_eq!(Route::from_args(Vec::<String>::new()), Route::Home);
    }
}
