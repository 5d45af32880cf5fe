//! Blog content. The index cards and the full articles are two separate
//! lists; only slugs present in [`post_details`] resolve on the detail page.

use super::strings;
use crate::model::blog::{BlogPost, BlogPostDetail};

#[allow(clippy::too_many_arguments)]
fn post(
    slug: &str,
    title: &str,
    summary: &str,
    date: &str,
    image: &str,
    tags: &[&str],
    read_time: &str,
    featured: bool,
) -> BlogPost {
    BlogPost {
        slug: slug.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        date: date.to_string(),
        image: image.to_string(),
        tags: strings(tags),
        read_time: Some(read_time.to_string()),
        featured,
    }
}

pub fn posts() -> Vec<BlogPost> {
    vec![
        post(
            "mastering-react-hooks",
            "Mastering React Hooks: A Deep Dive",
            "Explore advanced patterns and best practices for using React Hooks to build scalable and maintainable applications.",
            "2023-10-26",
            "https://images.pexels.com/photos/57690/pexels-photo-57690.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["React", "Hooks", "Frontend", "JavaScript"],
            "8 min read",
            true,
        ),
        post(
            "demystifying-microservices",
            "Demystifying Microservices: A Practical Guide",
            "Understand the core concepts of microservices architecture and learn how to design and implement them effectively.",
            "2023-09-15",
            "https://images.pexels.com/photos/1181244/pexels-photo-1181244.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["Backend", "Architecture", "Cloud", "DevOps"],
            "12 min read",
            true,
        ),
        post(
            "css-in-js-vs-tailwind",
            "CSS-in-JS vs. Tailwind CSS: Which to Choose?",
            "A comprehensive comparison of two popular styling approaches for modern web development, helping you decide the best fit for your project.",
            "2023-08-01",
            "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["CSS", "Tailwind", "Styling", "Frontend"],
            "10 min read",
            false,
        ),
        post(
            "optimizing-database-performance",
            "Optimizing Database Performance for Scale",
            "Tips and tricks for improving database query performance, indexing strategies, and scaling your data layer.",
            "2023-07-10",
            "https://images.pexels.com/photos/3861958/pexels-photo-3861958.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["Database", "SQL", "NoSQL", "Performance"],
            "15 min read",
            false,
        ),
        post(
            "getting-started-with-typescript",
            "Getting Started with TypeScript in 2023",
            "A beginner-friendly guide to setting up TypeScript in your projects and leveraging its powerful features for type safety.",
            "2023-06-20",
            "https://images.pexels.com/photos/546819/pexels-photo-546819.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["TypeScript", "JavaScript", "Programming"],
            "7 min read",
            false,
        ),
        post(
            "react-18-new-features",
            "React 18: What's New and Exciting",
            "Explore the latest features in React 18 including concurrent rendering, automatic batching, and the new transition API.",
            "2023-05-15",
            "https://images.pexels.com/photos/11035471/pexels-photo-11035471.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["React", "JavaScript", "Frontend", "Web Development"],
            "9 min read",
            false,
        ),
        post(
            "accessibility-best-practices",
            "Web Accessibility: Best Practices for Inclusive Design",
            "Learn how to create websites that are accessible to everyone, including users with disabilities.",
            "2023-04-05",
            "https://images.pexels.com/photos/6804604/pexels-photo-6804604.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["Accessibility", "UX", "HTML", "Design"],
            "11 min read",
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn detail(
    slug: &str,
    title: &str,
    author: &str,
    date: &str,
    image: &str,
    read_time: Option<&str>,
    tags: &[&str],
    body: &str,
) -> BlogPostDetail {
    BlogPostDetail {
        slug: slug.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        image: image.to_string(),
        read_time: read_time.map(str::to_string),
        tags: strings(tags),
        body: body.to_string(),
    }
}

pub fn post_details() -> Vec<BlogPostDetail> {
    vec![
        detail(
            "future-of-web-development",
            "The Future of Web Development: A Look Ahead",
            "John Doe",
            "October 26, 2023",
            "https://images.pexels.com/photos/546819/pexels-photo-546819.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Some("6 min read"),
            &["Web Development", "Technology", "Future Trends"],
            FUTURE_OF_WEB_DEVELOPMENT,
        ),
        detail(
            "mastering-react-hooks",
            "Mastering React Hooks: Tips and Tricks",
            "Jane Smith",
            "September 15, 2023",
            "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Some("8 min read"),
            &["React", "JavaScript", "Web Development"],
            MASTERING_REACT_HOOKS,
        ),
        detail(
            "demystifying-css-grid",
            "Demystifying CSS Grid: A Comprehensive Guide",
            "Alice Wonderland",
            "August 01, 2023",
            "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Some("7 min read"),
            &["CSS", "Web Design", "Layout"],
            DEMYSTIFYING_CSS_GRID,
        ),
        detail(
            "building-restful-apis",
            "Building RESTful APIs with Node.js and Express",
            "Bob Builder",
            "July 10, 2023",
            "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            Some("9 min read"),
            &["Node.js", "API", "Backend", "Express"],
            BUILDING_RESTFUL_APIS,
        ),
        detail(
            "intro-to-typescript",
            "Introduction to TypeScript for JavaScript Developers",
            "Charlie Coder",
            "June 20, 2023",
            "https://images.pexels.com/photos/160107/pexels-photo-160107.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            None,
            &[],
            INTRO_TO_TYPESCRIPT,
        ),
        detail(
            "optimizing-web-performance",
            "Optimizing Web Performance: A Practical Checklist",
            "Diana Dev",
            "May 05, 2023",
            "https://images.pexels.com/photos/3862632/pexels-photo-3862632.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            None,
            &[],
            OPTIMIZING_WEB_PERFORMANCE,
        ),
    ]
}

const FUTURE_OF_WEB_DEVELOPMENT: &str = r##"The landscape of web development is constantly evolving, with new technologies and paradigms emerging at a rapid pace. Staying ahead requires continuous learning and an eye on the horizon. In this post, we'll explore some of the most exciting trends that are set to redefine how we build for the web.

## WebAssembly (Wasm)

WebAssembly is no longer just a buzzword; it's becoming a fundamental part of high-performance web applications. By allowing code written in languages like C++, Rust, and Go to run in the browser at near-native speeds, Wasm opens up new possibilities for complex applications, games, and even desktop-like experiences directly in the browser.

Imagine running computationally intensive tasks, video editing software, or CAD tools directly in your browser without plugins. That's the promise of WebAssembly, and it's already being delivered by major players like Figma and Google Earth.

## AI and Machine Learning in Development

Artificial intelligence is not just for data scientists anymore. AI-powered tools are increasingly assisting developers with code generation, bug detection, and even automated testing. Tools like GitHub Copilot are just the beginning, promising to significantly boost developer productivity and reduce repetitive tasks.

Furthermore, integrating AI/ML models directly into web applications is becoming more accessible, enabling features like personalized content recommendations, intelligent search, and real-time data analysis directly on the client-side or via serverless functions.

## Serverless Architectures

Serverless computing continues its ascent, abstracting away server management and allowing developers to focus purely on writing code. Services like AWS Lambda, Google Cloud Functions, and Azure Functions enable highly scalable and cost-effective backend solutions, ideal for microservices and event-driven architectures.

This shift not only simplifies deployment and scaling but also encourages a more modular approach to application design, leading to more resilient and maintainable systems.

## Edge Computing

As applications become more distributed and real-time, edge computing is gaining traction. By processing data closer to the user (at the "edge" of the network), latency is reduced, and performance is enhanced. This is particularly crucial for IoT devices, real-time analytics, and applications requiring instant responses.

Content Delivery Networks (CDNs) are evolving into powerful edge platforms, offering compute capabilities that bring backend logic closer to the end-user, further blurring the lines between client and server.

## Conclusion

The future of web development is exciting and dynamic. Embracing these trends (WebAssembly, AI integration, serverless, and edge computing) will be key for developers looking to build the next generation of innovative and performant web applications. The journey is continuous, and the possibilities are endless.
"##;

const MASTERING_REACT_HOOKS: &str = r##"React Hooks revolutionized how we write React components, bringing state and side effects to functional components. While basic usage is straightforward, mastering them involves understanding subtle nuances and advanced patterns.

## Understanding the Rules of Hooks

Before diving into advanced usage, it's crucial to remember the two golden rules:

1. **Only call Hooks at the top level:** Don't call Hooks inside loops, conditions, or nested functions.
2. **Only call Hooks from React functions:** Call them from React functional components or from custom Hooks.

These rules ensure that Hooks are called in the same order on every render, allowing React to correctly preserve the state of Hooks between multiple `useState` and `useEffect` calls.

## Custom Hooks for Reusability

One of the most powerful features of Hooks is the ability to create custom Hooks. A custom Hook is a JavaScript function whose name starts with "use" and that may call other Hooks. They allow you to extract component logic into reusable functions.

```js
import { useState, useEffect } from 'react';

function useWindowWidth() {
  const [width, setWidth] = useState(window.innerWidth);

  useEffect(() => {
    const handleResize = () => setWidth(window.innerWidth);
    window.addEventListener('resize', handleResize);
    return () => window.removeEventListener('resize', handleResize);
  }, []);

  return width;
}
```

This `useWindowWidth` Hook can now be used in any component to get the current window width, abstracting away the event listener logic.

## Optimizing Performance with `useMemo` and `useCallback`

`useMemo` and `useCallback` are Hooks that help optimize performance by memoizing values and functions, preventing unnecessary re-renders of child components.

- `useMemo`: Memoizes a value. It only recomputes the memoized value when one of the dependencies has changed.
- `useCallback`: Memoizes a function. It returns a memoized version of the callback that only changes if one of the dependencies has changed. This is particularly useful when passing callbacks to optimized child components that rely on reference equality to prevent unnecessary renders.

While powerful, use these Hooks judiciously. Overuse can sometimes lead to more overhead than benefit. Profile your application to identify performance bottlenecks before applying these optimizations.

## Conclusion

React Hooks provide a flexible and powerful way to manage state and side effects in functional components. By understanding their rules, leveraging custom Hooks for reusability, and applying memoization techniques wisely, you can write cleaner, more performant, and more maintainable React applications.
"##;

const DEMYSTIFYING_CSS_GRID: &str = r##"CSS Grid Layout is a two-dimensional layout system for the web. It lets you lay out content in rows and columns, making it incredibly powerful for designing complex, responsive web pages. If you've struggled with traditional CSS layouts, Grid is here to make your life easier.

## Basic Concepts: Grid Container and Grid Items

To start using CSS Grid, you define a **grid container** by setting `display: grid;` on an element. Its direct children then become **grid items**.

```css
.container {
  display: grid;
  grid-template-columns: 1fr 1fr 1fr; /* Three equal columns */
  grid-template-rows: auto auto; /* Two rows, height determined by content */
  gap: 20px; /* Spacing between grid items */
}
```

The `grid-template-columns` and `grid-template-rows` properties define the structure of your grid. The `fr` unit (fractional unit) is particularly useful as it distributes available space proportionally.

## Placing Items on the Grid

Once your grid is defined, you can place items explicitly using line numbers or named grid areas.

```css
.item-a {
  grid-column: 1 / 3; /* Spans from column line 1 to 3 */
  grid-row: 1;
}

.item-b {
  grid-area: header; /* If you've defined named areas */
}
```

Named grid areas, defined with `grid-template-areas`, offer a more visual way to structure your layout, especially for complex designs.

## Responsiveness with Grid

CSS Grid shines when it comes to responsiveness. Media queries can easily redefine grid templates for different screen sizes.

```css
.container {
  grid-template-columns: 1fr; /* Single column on small screens */
}

@media (min-width: 768px) {
  .container {
    grid-template-columns: 1fr 1fr; /* Two columns on medium screens */
  }
}
```

Additionally, functions like `repeat()`, `minmax()`, and properties like `grid-auto-flow` provide powerful tools for creating flexible and dynamic grids that adapt automatically.

## Conclusion

CSS Grid is a game-changer for web layout. Its two-dimensional capabilities, combined with powerful placement and responsiveness features, make it an indispensable tool for modern web development. Start experimenting with it, and you'll quickly discover its immense potential.
"##;

const BUILDING_RESTFUL_APIS: &str = r##"Building robust and scalable RESTful APIs is a core skill for any modern web developer. Node.js, combined with the Express.js framework, provides a fast and efficient way to create these APIs. This guide will walk you through the essentials.

## What is a RESTful API?

REST (Representational State Transfer) is an architectural style for distributed hypermedia systems. A RESTful API adheres to a set of principles:

- **Client-Server:** Separation of concerns.
- **Stateless:** Each request from client to server must contain all the information needed to understand the request.
- **Cacheable:** Responses must explicitly or implicitly define themselves as cacheable or non-cacheable.
- **Layered System:** A client cannot ordinarily tell whether it is connected directly to the end server, or to an intermediary.
- **Uniform Interface:** Simplifies and decouples the architecture. This includes resource identification, resource manipulation through representations, self-descriptive messages, and HATEOAS (Hypermedia as the Engine of Application State).

Common HTTP methods (GET, POST, PUT, DELETE) are used to perform CRUD (Create, Read, Update, Delete) operations on resources.

## Setting up Your Node.js and Express Project

First, initialize your project and install Express:

```sh
mkdir my-api
cd my-api
npm init -y
npm install express mongoose dotenv
```

Then, create your main application file (e.g., `app.js`):

```js
const express = require('express');
const mongoose = require('mongoose');
require('dotenv').config();

const app = express();
const PORT = process.env.PORT || 3000;

// Middleware
app.use(express.json()); // For parsing JSON request bodies

// Connect to MongoDB
mongoose.connect(process.env.MONGO_URI)
  .then(() => console.log('MongoDB connected'))
  .catch(err => console.error(err));

// Basic route
app.get('/', (req, res) => {
  res.send('API is running...');
});

// Start the server
app.listen(PORT, () => {
  console.log(`Server running on port ${PORT}`);
});
```

## Defining Routes and Controllers

For a RESTful API, you'll typically define routes for each resource (e.g., `/api/products`, `/api/users`) and use controllers to handle the business logic.

```js
// routes/productRoutes.js
const express = require('express');
const router = express.Router();
const Product = require('../models/Product');

// GET all products
router.get('/', async (req, res) => {
  try {
    const products = await Product.find();
    res.json(products);
  } catch (err) {
    res.status(500).json({ message: err.message });
  }
});

module.exports = router;
```

Then, in your `app.js`, use these routes:

```js
const productRoutes = require('./routes/productRoutes');
app.use('/api/products', productRoutes);
```

## Conclusion

Node.js and Express provide a powerful and flexible foundation for building RESTful APIs. By following REST principles and structuring your application with clear routes and controllers, you can create efficient, scalable, and maintainable backend services for your web applications.
"##;

const INTRO_TO_TYPESCRIPT: &str = r##"TypeScript is a superset of JavaScript that adds static typing to the language. This means you can define the types of variables, function parameters, and return values, allowing for better code organization, readability, and error detection during development, rather than at runtime.

## Why TypeScript?

JavaScript is dynamically typed, which offers flexibility but can lead to subtle bugs that are only discovered when the code runs. TypeScript addresses this by catching type-related errors during compilation. Benefits include:

- **Early Error Detection:** Catch bugs before they reach production.
- **Improved Readability:** Code becomes self-documenting with explicit types.
- **Better Tooling:** Enhanced autocompletion, refactoring, and navigation in IDEs.
- **Scalability:** Easier to manage large codebases and collaborate in teams.

## Basic Types in TypeScript

TypeScript supports all standard JavaScript types and adds a few of its own:

```ts
let isDone: boolean = false;
let decimal: number = 6;
let color: string = "blue";

let list: number[] = [1, 2, 3];
let x: [string, number] = ["hello", 10];

enum Color {Red, Green, Blue}
let c: Color = Color.Green;

function warnUser(): void {
  console.log("This is my warning message");
}
```

## Interfaces and Type Aliases

Interfaces and type aliases are powerful ways to define custom types for objects and functions, promoting consistency and reusability.

```ts
interface User {
  id: number;
  name: string;
  email?: string; // Optional property
}

type StringOrNumber = string | number;
```

## Compiling TypeScript

TypeScript code needs to be compiled into plain JavaScript to run in browsers or Node.js environments. You typically use the TypeScript compiler (`tsc`).

```sh
npm install -g typescript
tsc my-file.ts
tsc --init
```

The `tsconfig.json` file allows you to configure compiler options for your entire project.

## Conclusion

TypeScript offers significant advantages for building robust and maintainable JavaScript applications, especially as projects grow in complexity. By embracing static typing, you can catch errors earlier, improve code quality, and enhance the developer experience. It's a valuable addition to any modern web developer's toolkit.
"##;

const OPTIMIZING_WEB_PERFORMANCE: &str = r##"Web performance is crucial for user experience, SEO, and conversion rates. A slow website can frustrate users and lead to higher bounce rates. This checklist provides practical steps to optimize your web application's performance.

## 1. Optimize Images

Images often account for a significant portion of page weight. Ensure your images are optimized:

- **Compress Images:** Use tools like TinyPNG or ImageOptim, or integrate compression into your build process.
- **Choose Correct Format:** Use WebP for modern browsers, JPEG for photos, and PNG for graphics with transparency.
- **Responsive Images:** Use `srcset` and `sizes` attributes to serve different image sizes based on the user's device.
- **Lazy Loading:** Defer loading offscreen images until they are needed using the `loading="lazy"` attribute or JavaScript.

## 2. Minify CSS and JavaScript

Minification removes unnecessary characters (whitespace, comments) from your code without changing its functionality, reducing file size.

```js
// Before minification
function add(a, b) {
  // This adds two numbers
  return a + b;
}

// After minification
function add(a,b){return a+b}
```

Most modern build tools (Webpack, Rollup, Vite) include minification capabilities out of the box.

## 3. Leverage Browser Caching

Caching stores frequently accessed resources (images, CSS, JS) on the user's browser, so they don't have to be re-downloaded on subsequent visits. Configure HTTP caching headers (`Cache-Control`, `Expires`) on your server.

## 4. Reduce Render-Blocking Resources

CSS and JavaScript files can block the browser from rendering content until they are downloaded and parsed. To mitigate this:

- **Inline Critical CSS:** Embed essential CSS directly in the HTML for the above-the-fold content.
- **Defer Non-Critical CSS/JS:** Use `<link rel="preload">`, `async`, or `defer` attributes for scripts.

## 5. Optimize Font Loading

Web fonts can be large and cause FOUT (Flash of Unstyled Text) or FOIT (Flash of Invisible Text). Use `font-display: swap;` in your `@font-face` rules and preload critical fonts.

## 6. Use a Content Delivery Network (CDN)

CDNs distribute your static assets across multiple servers globally. When a user requests your site, assets are served from the server geographically closest to them, reducing latency.

## 7. Server-Side Rendering (SSR) or Static Site Generation (SSG)

For content-heavy sites, SSR or SSG can significantly improve initial load times and SEO by delivering fully rendered HTML to the browser, rather than relying on client-side JavaScript to build the page.

## Conclusion

Web performance optimization is an ongoing process. Regularly audit your site using tools like Lighthouse, PageSpeed Insights, and WebPageTest to identify bottlenecks and continuously improve your user's experience. A fast website is a happy website!
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_in_each_list() {
        let cards = posts();
        let card_slugs: HashSet<&str> = cards.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(card_slugs.len(), cards.len());

        let details = post_details();
        let detail_slugs: HashSet<&str> = details.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(detail_slugs.len(), details.len());
    }

    #[test]
    fn slugs_are_url_safe() {
        let all = posts()
            .into_iter()
            .map(|p| p.slug)
            .chain(post_details().into_iter().map(|p| p.slug));
        for slug in all {
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{}",
                slug
            );
        }
    }

    #[test]
    fn last_two_articles_have_no_read_time() {
        let details = post_details();
        assert!(details[..4].iter().all(|p| p.read_time.is_some()));
        assert!(details[4..].iter().all(|p| p.read_time.is_none()));
    }
}
