//! Canned HTML pages served by the router.

pub const HOME_PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>Home</title></head>
<body>
<h1>Welcome</h1>
<p>This page is served by pagehand, a tiny HTTP/1.1 server.</p>
<ul>
<li><a href=\"/about\">About</a></li>
<li><a href=\"/contact\">Contact</a></li>
</ul>
</body>
</html>
";

pub const ABOUT_PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>About</title></head>
<body>
<h1>About</h1>
<p>Each request is read once, parsed, routed and answered on a fresh connection.</p>
<p><a href=\"/\">Back home</a></p>
</body>
</html>
";

pub const CONTACT_PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>Contact</title></head>
<body>
<h1>Contact</h1>
<p>Write to <a href=\"mailto:webmaster@localhost\">webmaster@localhost</a>.</p>
<p><a href=\"/\">Back home</a></p>
</body>
</html>
";

pub const NOT_FOUND_PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>404 Not Found</title></head>
<body>
<h1>404 Not Found</h1>
<p>The requested page does not exist.</p>
<p><a href=\"/\">Back home</a></p>
</body>
</html>
";

/// Body used in plain-text mode when none is configured.
pub const DEFAULT_PLAIN_TEXT: &str = "Hello, HTTP!";
